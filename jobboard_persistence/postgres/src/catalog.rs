use std::collections::HashMap;

use bb8_postgres::tokio_postgres::{types::ToSql, Row};
use jobboard_di::Build;
use jobboard_models::{
    job::{
        CatalogEntry, CategoryField, JobCategory, JobCategoryId, JobId, JobPosting,
        JobPostingPatch, JobPredicate,
    },
    pagination::PaginationSlice,
};
use jobboard_persistence_contracts::catalog::CatalogRepository;
use jobboard_utils::patch::PatchValue;
use uuid::Uuid;

use crate::{arg_indices, columns, query::QueryBuilder, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Build)]
pub struct PostgresCatalogRepository;

columns!(field as "f": "id", "name");
columns!(pub(crate) category as "jc": "id", "field_id", "name");
columns!(job as "j": "id", "company_id", "title", "description", "salary", "quantity", "active", "closing_at", "posted_at");

impl CatalogRepository<PostgresTransaction> for PostgresCatalogRepository {
    async fn list_fields(&self, txn: &mut PostgresTransaction) -> anyhow::Result<Vec<CategoryField>> {
        txn.txn()?
            .query(
                &format!("select {FIELD_COLS} from category_fields f order by f.name, f.id"),
                &[],
            )
            .await?
            .iter()
            .map(|row| decode_field(row, &mut Default::default()))
            .collect()
    }

    async fn create_field(
        &self,
        txn: &mut PostgresTransaction,
        field: &CategoryField,
    ) -> anyhow::Result<()> {
        txn.txn()?
            .execute(
                &format!(
                    "insert into category_fields ({FIELD_COL_NAMES}) values ({})",
                    arg_indices(1..=FIELD_CNT)
                ),
                &[&*field.id, &field.name.as_str()],
            )
            .await?;
        Ok(())
    }

    async fn list_categories(
        &self,
        txn: &mut PostgresTransaction,
    ) -> anyhow::Result<Vec<JobCategory>> {
        txn.txn()?
            .query(
                &format!("select {CATEGORY_COLS} from job_categories jc order by jc.name, jc.id"),
                &[],
            )
            .await?
            .iter()
            .map(|row| decode_category(row, &mut Default::default()))
            .collect()
    }

    async fn create_category(
        &self,
        txn: &mut PostgresTransaction,
        category: &JobCategory,
    ) -> anyhow::Result<()> {
        txn.txn()?
            .execute(
                &format!(
                    "insert into job_categories ({CATEGORY_COL_NAMES}) values ({})",
                    arg_indices(1..=CATEGORY_CNT)
                ),
                &[&*category.id, &*category.field_id, &category.name.as_str()],
            )
            .await?;
        Ok(())
    }

    async fn get_categories(
        &self,
        txn: &mut PostgresTransaction,
        category_ids: Vec<JobCategoryId>,
    ) -> anyhow::Result<Vec<JobCategory>> {
        let ids = category_ids.into_iter().map(|id| *id).collect::<Vec<Uuid>>();
        txn.txn()?
            .query(
                &format!(
                    "select {CATEGORY_COLS} from job_categories jc where jc.id=any($1) order by \
                     jc.name, jc.id"
                ),
                &[&ids],
            )
            .await?
            .iter()
            .map(|row| decode_category(row, &mut Default::default()))
            .collect()
    }

    async fn get_job(
        &self,
        txn: &mut PostgresTransaction,
        job_id: JobId,
    ) -> anyhow::Result<Option<JobPosting>> {
        txn.txn()?
            .query_opt(
                &format!("select {JOB_COLS} from job_postings j where j.id=$1"),
                &[&*job_id],
            )
            .await?
            .map(|row| decode_job(&row, &mut Default::default()))
            .transpose()
    }

    async fn get_entry(
        &self,
        txn: &mut PostgresTransaction,
        job_id: JobId,
    ) -> anyhow::Result<Option<CatalogEntry>> {
        let entries = self
            .list_entries(txn, &JobPredicate::Id(job_id), None)
            .await?;
        Ok(entries.into_iter().next())
    }

    async fn list_entries(
        &self,
        txn: &mut PostgresTransaction,
        predicate: &JobPredicate,
        pagination: Option<PaginationSlice>,
    ) -> anyhow::Result<Vec<CatalogEntry>> {
        let mut builder = QueryBuilder::new();
        let condition = builder.job_condition(predicate);
        let mut query = format!(
            "select {JOB_COLS}, co.rating from job_postings j inner join companies co on \
             co.id=j.company_id where {condition} order by j.posted_at desc, j.id asc"
        );
        if let Some(PaginationSlice { limit, offset }) = pagination {
            let limit = builder.bind(i64::try_from(*limit)?);
            let offset = builder.bind(i64::try_from(offset)?);
            query.push_str(&format!(" limit {limit} offset {offset}"));
        }

        let txn = txn.txn()?;
        let rows = txn.query(&query, &builder.params()).await?;
        let mut entries = rows
            .iter()
            .map(|row| {
                let mut cnt = ColumnCounter::default();
                let job = decode_job(row, &mut cnt)?;
                let company_rating = row.get(cnt.idx());
                anyhow::Ok(CatalogEntry {
                    job,
                    categories: Vec::new(),
                    company_rating,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let job_ids = entries.iter().map(|entry| *entry.job.id).collect::<Vec<Uuid>>();
        let mut categories = HashMap::<Uuid, Vec<JobCategory>>::new();
        for row in txn
            .query(
                &format!(
                    "select jpc.job_id, {CATEGORY_COLS} from job_posting_categories jpc inner \
                     join job_categories jc on jc.id=jpc.category_id where jpc.job_id=any($1) \
                     order by jc.name, jc.id"
                ),
                &[&job_ids],
            )
            .await?
        {
            let mut cnt = ColumnCounter::default();
            let job_id = row.get::<_, Uuid>(cnt.idx());
            categories
                .entry(job_id)
                .or_default()
                .push(decode_category(&row, &mut cnt)?);
        }
        for entry in &mut entries {
            entry.categories = categories.remove(&*entry.job.id).unwrap_or_default();
        }

        Ok(entries)
    }

    async fn count(
        &self,
        txn: &mut PostgresTransaction,
        predicate: &JobPredicate,
    ) -> anyhow::Result<u64> {
        let mut builder = QueryBuilder::new();
        let condition = builder.job_condition(predicate);
        let count: i64 = txn
            .txn()?
            .query_one(
                &format!("select count(*) from job_postings j where {condition}"),
                &builder.params(),
            )
            .await?
            .get(0);
        Ok(count.try_into()?)
    }

    async fn create_job(&self, txn: &mut PostgresTransaction, job: &JobPosting) -> anyhow::Result<()> {
        txn.txn()?
            .execute(
                &format!(
                    "insert into job_postings ({JOB_COL_NAMES}) values ({})",
                    arg_indices(1..=JOB_CNT)
                ),
                &[
                    &*job.id,
                    &*job.company_id,
                    &job.title.as_str(),
                    &job.description.as_str(),
                    &job.salary,
                    &*job.quantity,
                    &job.active,
                    &job.closing_at,
                    &job.posted_at,
                ],
            )
            .await?;
        Ok(())
    }

    async fn update_job(
        &self,
        txn: &mut PostgresTransaction,
        job_id: JobId,
        patch: &JobPostingPatch,
    ) -> anyhow::Result<bool> {
        let JobPostingPatch {
            title,
            description,
            salary,
            quantity,
            active,
            closing_at,
        } = patch;

        let title = title.as_ref().map(|x| x.as_str());
        let description = description.as_ref().map(|x| x.as_str());
        let quantity = quantity.as_ref().map(|x| **x);

        let mut updates: Vec<(&str, &(dyn ToSql + Sync))> = Vec::new();
        if let PatchValue::Update(title) = &title {
            updates.push(("title", title));
        }
        if let PatchValue::Update(description) = &description {
            updates.push(("description", description));
        }
        if let PatchValue::Update(salary) = salary {
            updates.push(("salary", salary));
        }
        if let PatchValue::Update(quantity) = &quantity {
            updates.push(("quantity", quantity));
        }
        if let PatchValue::Update(active) = active {
            updates.push(("active", active));
        }
        if let PatchValue::Update(closing_at) = closing_at {
            updates.push(("closing_at", closing_at));
        }

        let mut params: Vec<&(dyn ToSql + Sync)> = vec![&*job_id];
        let mut assignments = vec!["id=id".to_owned()];
        for (column, value) in updates {
            params.push(value);
            assignments.push(format!("{column}=${}", params.len()));
        }

        let updated = txn
            .txn()?
            .execute(
                &format!(
                    "update job_postings set {} where id=$1",
                    assignments.join(", ")
                ),
                &params,
            )
            .await?;
        Ok(updated != 0)
    }

    async fn delete_job(&self, txn: &mut PostgresTransaction, job_id: JobId) -> anyhow::Result<bool> {
        let deleted = txn
            .txn()?
            .execute("delete from job_postings where id=$1", &[&*job_id])
            .await?;
        Ok(deleted != 0)
    }

    async fn set_job_categories(
        &self,
        txn: &mut PostgresTransaction,
        job_id: JobId,
        category_ids: Vec<JobCategoryId>,
    ) -> anyhow::Result<()> {
        let ids = category_ids.into_iter().map(|id| *id).collect::<Vec<Uuid>>();
        let txn = txn.txn()?;
        txn.execute(
            "delete from job_posting_categories where job_id=$1",
            &[&*job_id],
        )
        .await?;
        txn.execute(
            "insert into job_posting_categories (job_id, category_id) select $1::uuid, \
             unnest($2::uuid[]) on conflict do nothing",
            &[&*job_id, &ids],
        )
        .await?;
        Ok(())
    }
}

fn decode_field(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<CategoryField> {
    Ok(CategoryField {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        name: row.get::<_, String>(cnt.idx()).try_into()?,
    })
}

pub(crate) fn decode_category(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<JobCategory> {
    Ok(JobCategory {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        field_id: row.get::<_, Uuid>(cnt.idx()).into(),
        name: row.get::<_, String>(cnt.idx()).try_into()?,
    })
}

fn decode_job(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<JobPosting> {
    Ok(JobPosting {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        company_id: row.get::<_, Uuid>(cnt.idx()).into(),
        title: row.get::<_, String>(cnt.idx()).try_into()?,
        description: row.get::<_, String>(cnt.idx()).try_into()?,
        salary: row.get(cnt.idx()),
        quantity: row.get::<_, i32>(cnt.idx()).try_into()?,
        active: row.get(cnt.idx()),
        closing_at: row.get(cnt.idx()),
        posted_at: row.get(cnt.idx()),
    })
}
