use bb8_postgres::tokio_postgres::Row;
use jobboard_di::Build;
use jobboard_models::{account::AccountId, application::SavedJob, job::JobId};
use jobboard_persistence_contracts::saved::SavedJobRepository;
use uuid::Uuid;

use crate::{arg_indices, columns, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Build)]
pub struct PostgresSavedJobRepository;

columns!(saved_job as "s": "seeker_id", "job_id", "saved_at");

impl SavedJobRepository<PostgresTransaction> for PostgresSavedJobRepository {
    async fn list(
        &self,
        txn: &mut PostgresTransaction,
        seeker_id: AccountId,
    ) -> anyhow::Result<Vec<SavedJob>> {
        Ok(txn
            .txn()?
            .query(
                &format!(
                    "select {SAVED_JOB_COLS} from saved_jobs s where s.seeker_id=$1 order by \
                     s.saved_at desc, s.job_id"
                ),
                &[&*seeker_id],
            )
            .await?
            .iter()
            .map(|row| decode_saved_job(row, &mut Default::default()))
            .collect())
    }

    async fn save(&self, txn: &mut PostgresTransaction, saved_job: &SavedJob) -> anyhow::Result<bool> {
        let inserted = txn
            .txn()?
            .execute(
                &format!(
                    "insert into saved_jobs ({SAVED_JOB_COL_NAMES}) values ({}) on conflict do \
                     nothing",
                    arg_indices(1..=SAVED_JOB_CNT)
                ),
                &[&*saved_job.seeker_id, &*saved_job.job_id, &saved_job.saved_at],
            )
            .await?;
        Ok(inserted != 0)
    }

    async fn delete(
        &self,
        txn: &mut PostgresTransaction,
        seeker_id: AccountId,
        job_id: JobId,
    ) -> anyhow::Result<bool> {
        let deleted = txn
            .txn()?
            .execute(
                "delete from saved_jobs where seeker_id=$1 and job_id=$2",
                &[&*seeker_id, &*job_id],
            )
            .await?;
        Ok(deleted != 0)
    }
}

fn decode_saved_job(row: &Row, cnt: &mut ColumnCounter) -> SavedJob {
    SavedJob {
        seeker_id: row.get::<_, Uuid>(cnt.idx()).into(),
        job_id: row.get::<_, Uuid>(cnt.idx()).into(),
        saved_at: row.get(cnt.idx()),
    }
}
