use std::future::Future;

use jobboard_models::{
    account::AccountId,
    error_code,
    job::{CatalogEntry, JobId},
};
use thiserror::Error;

/// Checks that an employer may manage a job posting.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait JobOwnershipService<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return the posting if it belongs to the employer's current company.
    fn authorize(
        &self,
        txn: &mut Txn,
        employer_id: AccountId,
        job_id: JobId,
    ) -> impl Future<Output = Result<CatalogEntry, JobOwnershipError>> + Send;
}

#[derive(Debug, Error)]
pub enum JobOwnershipError {
    #[error("The account is not an employee of any company.")]
    NotAnEmployee,
    #[error("The job posting does not exist.")]
    JobNotFound,
    #[error("The job posting belongs to another company.")]
    NotJobOwner,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(JobOwnershipError {
    Self::NotAnEmployee => Authorization("not_an_employee"),
    Self::JobNotFound => NotFound("job_not_found"),
    Self::NotJobOwner => Authorization("not_job_owner"),
    Self::Other(_) => Transient("internal_error"),
});

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockJobOwnershipService<Txn> {
    pub fn with_authorize(
        mut self,
        employer_id: AccountId,
        job_id: JobId,
        result: Result<CatalogEntry, JobOwnershipError>,
    ) -> Self {
        self.expect_authorize()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(employer_id),
                mockall::predicate::eq(job_id),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }
}
