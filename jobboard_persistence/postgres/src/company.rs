use bb8_postgres::tokio_postgres::Row;
use jobboard_di::Build;
use jobboard_models::company::{Company, CompanyId};
use jobboard_persistence_contracts::company::CompanyRepository;
use uuid::Uuid;

use crate::{arg_indices, columns, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Build)]
pub struct PostgresCompanyRepository;

columns!(company as "co": "id", "name", "rating");

impl CompanyRepository<PostgresTransaction> for PostgresCompanyRepository {
    async fn get(
        &self,
        txn: &mut PostgresTransaction,
        company_id: CompanyId,
    ) -> anyhow::Result<Option<Company>> {
        txn.txn()?
            .query_opt(
                &format!("select {COMPANY_COLS} from companies co where co.id=$1"),
                &[&*company_id],
            )
            .await?
            .map(|row| decode_company(&row, &mut Default::default()))
            .transpose()
    }

    async fn create(&self, txn: &mut PostgresTransaction, company: &Company) -> anyhow::Result<()> {
        txn.txn()?
            .execute(
                &format!(
                    "insert into companies ({COMPANY_COL_NAMES}) values ({})",
                    arg_indices(1..=COMPANY_CNT)
                ),
                &[&*company.id, &company.name.as_str(), &company.rating],
            )
            .await?;
        Ok(())
    }
}

fn decode_company(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<Company> {
    Ok(Company {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        name: row.get::<_, String>(cnt.idx()).try_into()?,
        rating: row.get(cnt.idx()),
    })
}
