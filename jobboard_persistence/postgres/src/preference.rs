use jobboard_di::Build;
use jobboard_models::{
    account::AccountId,
    job::{JobCategory, JobCategoryId},
};
use jobboard_persistence_contracts::preference::PreferenceRepository;
use uuid::Uuid;

use crate::{
    catalog::{decode_category, CATEGORY_COLS},
    ColumnCounter, PostgresTransaction,
};

#[derive(Debug, Clone, Build)]
pub struct PostgresPreferenceRepository;

impl PreferenceRepository<PostgresTransaction> for PostgresPreferenceRepository {
    async fn list(
        &self,
        txn: &mut PostgresTransaction,
        seeker_id: AccountId,
    ) -> anyhow::Result<Vec<JobCategory>> {
        txn.txn()?
            .query(
                &format!(
                    "select {CATEGORY_COLS} from seeker_preferences p inner join job_categories \
                     jc on jc.id=p.category_id where p.seeker_id=$1 order by jc.name, jc.id"
                ),
                &[&*seeker_id],
            )
            .await?
            .iter()
            .map(|row| decode_category(row, &mut ColumnCounter::default()))
            .collect()
    }

    async fn replace(
        &self,
        txn: &mut PostgresTransaction,
        seeker_id: AccountId,
        category_ids: Vec<JobCategoryId>,
    ) -> anyhow::Result<()> {
        let ids = category_ids.into_iter().map(|id| *id).collect::<Vec<Uuid>>();
        let txn = txn.txn()?;
        txn.execute(
            "delete from seeker_preferences where seeker_id=$1",
            &[&*seeker_id],
        )
        .await?;
        txn.execute(
            "insert into seeker_preferences (seeker_id, category_id) select $1::uuid, \
             unnest($2::uuid[])",
            &[&*seeker_id, &ids],
        )
        .await?;
        Ok(())
    }
}
