use bb8_postgres::tokio_postgres::{self, Row};
use jobboard_di::Build;
use jobboard_models::{
    account::AccountId,
    application::{ApplicationRequest, ApplicationRequestId, ApplicationResolution},
    job::JobId,
};
use jobboard_persistence_contracts::application::{ApplicationRepoError, ApplicationRepository};
use uuid::Uuid;

use crate::{arg_indices, columns, ColumnCounter, PostgresTransaction};

#[derive(Debug, Clone, Build)]
pub struct PostgresApplicationRepository;

columns!(application as "ar": "id", "seeker_id", "job_id", "status", "cover_letter", "submitted_at", "response", "responded_at");

impl ApplicationRepository<PostgresTransaction> for PostgresApplicationRepository {
    async fn get(
        &self,
        txn: &mut PostgresTransaction,
        request_id: ApplicationRequestId,
    ) -> anyhow::Result<Option<ApplicationRequest>> {
        txn.txn()?
            .query_opt(
                &format!("select {APPLICATION_COLS} from application_requests ar where ar.id=$1"),
                &[&*request_id],
            )
            .await?
            .map(|row| decode_application(&row, &mut Default::default()))
            .transpose()
    }

    async fn get_by_seeker_and_job(
        &self,
        txn: &mut PostgresTransaction,
        seeker_id: AccountId,
        job_id: JobId,
    ) -> anyhow::Result<Option<ApplicationRequest>> {
        txn.txn()?
            .query_opt(
                &format!(
                    "select {APPLICATION_COLS} from application_requests ar where \
                     ar.seeker_id=$1 and ar.job_id=$2"
                ),
                &[&*seeker_id, &*job_id],
            )
            .await?
            .map(|row| decode_application(&row, &mut Default::default()))
            .transpose()
    }

    async fn list_by_seeker(
        &self,
        txn: &mut PostgresTransaction,
        seeker_id: AccountId,
    ) -> anyhow::Result<Vec<ApplicationRequest>> {
        txn.txn()?
            .query(
                &format!(
                    "select {APPLICATION_COLS} from application_requests ar where \
                     ar.seeker_id=$1 order by ar.submitted_at desc, ar.id desc"
                ),
                &[&*seeker_id],
            )
            .await?
            .iter()
            .map(|row| decode_application(row, &mut Default::default()))
            .collect()
    }

    async fn list_by_job(
        &self,
        txn: &mut PostgresTransaction,
        job_id: JobId,
    ) -> anyhow::Result<Vec<ApplicationRequest>> {
        txn.txn()?
            .query(
                &format!(
                    "select {APPLICATION_COLS} from application_requests ar where ar.job_id=$1 \
                     order by ar.submitted_at desc, ar.id desc"
                ),
                &[&*job_id],
            )
            .await?
            .iter()
            .map(|row| decode_application(row, &mut Default::default()))
            .collect()
    }

    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        request: &ApplicationRequest,
    ) -> Result<(), ApplicationRepoError> {
        txn.txn()?
            .execute(
                &format!(
                    "insert into application_requests ({APPLICATION_COL_NAMES}) values ({})",
                    arg_indices(1..=APPLICATION_CNT)
                ),
                &[
                    &*request.id,
                    &*request.seeker_id,
                    &*request.job_id,
                    &request.status.as_str(),
                    &request.cover_letter.as_ref().map(|x| x.as_str()),
                    &request.submitted_at,
                    &request.response.as_ref().map(|x| x.as_str()),
                    &request.responded_at,
                ],
            )
            .await
            .map_err(map_application_repo_error)?;
        Ok(())
    }

    async fn resolve(
        &self,
        txn: &mut PostgresTransaction,
        request_id: ApplicationRequestId,
        resolution: &ApplicationResolution,
    ) -> anyhow::Result<bool> {
        let updated = txn
            .txn()?
            .execute(
                "update application_requests set status=$2, response=$3, responded_at=$4 where \
                 id=$1 and status='pending'",
                &[
                    &*request_id,
                    &resolution.status.as_str(),
                    &resolution.response.as_str(),
                    &resolution.responded_at,
                ],
            )
            .await?;
        Ok(updated != 0)
    }
}

fn decode_application(row: &Row, cnt: &mut ColumnCounter) -> anyhow::Result<ApplicationRequest> {
    Ok(ApplicationRequest {
        id: row.get::<_, Uuid>(cnt.idx()).into(),
        seeker_id: row.get::<_, Uuid>(cnt.idx()).into(),
        job_id: row.get::<_, Uuid>(cnt.idx()).into(),
        status: row.get::<_, &str>(cnt.idx()).parse()?,
        cover_letter: row
            .get::<_, Option<String>>(cnt.idx())
            .map(TryInto::try_into)
            .transpose()?,
        submitted_at: row.get(cnt.idx()),
        response: row
            .get::<_, Option<String>>(cnt.idx())
            .map(TryInto::try_into)
            .transpose()?,
        responded_at: row.get(cnt.idx()),
    })
}

fn map_application_repo_error(err: tokio_postgres::Error) -> ApplicationRepoError {
    match err.as_db_error() {
        Some(db_err) if db_err.constraint() == Some("application_requests_seeker_job_idx") => {
            ApplicationRepoError::Conflict
        }
        _ => ApplicationRepoError::Other(err.into()),
    }
}
