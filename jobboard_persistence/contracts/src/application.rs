use std::future::Future;

use jobboard_models::{
    account::AccountId,
    application::{ApplicationRequest, ApplicationRequestId, ApplicationResolution},
    job::JobId,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ApplicationRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return the application request with the given id.
    fn get(
        &self,
        txn: &mut Txn,
        request_id: ApplicationRequestId,
    ) -> impl Future<Output = anyhow::Result<Option<ApplicationRequest>>> + Send;

    /// Return the application request of a seeker for a job.
    fn get_by_seeker_and_job(
        &self,
        txn: &mut Txn,
        seeker_id: AccountId,
        job_id: JobId,
    ) -> impl Future<Output = anyhow::Result<Option<ApplicationRequest>>> + Send;

    /// Return all application requests of a seeker, newest first.
    fn list_by_seeker(
        &self,
        txn: &mut Txn,
        seeker_id: AccountId,
    ) -> impl Future<Output = anyhow::Result<Vec<ApplicationRequest>>> + Send;

    /// Return all application requests for a job, newest first.
    fn list_by_job(
        &self,
        txn: &mut Txn,
        job_id: JobId,
    ) -> impl Future<Output = anyhow::Result<Vec<ApplicationRequest>>> + Send;

    /// Create a new application request.
    fn create(
        &self,
        txn: &mut Txn,
        request: &ApplicationRequest,
    ) -> impl Future<Output = Result<(), ApplicationRepoError>> + Send;

    /// Resolve a pending application request.
    ///
    /// Returns `false` if the request does not exist or is no longer
    /// pending.
    fn resolve(
        &self,
        txn: &mut Txn,
        request_id: ApplicationRequestId,
        resolution: &ApplicationResolution,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[derive(Debug, Error)]
pub enum ApplicationRepoError {
    #[error("The seeker has already applied for this job.")]
    Conflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockApplicationRepository<Txn> {
    pub fn with_get(
        mut self,
        request_id: ApplicationRequestId,
        result: Option<ApplicationRequest>,
    ) -> Self {
        self.expect_get()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(request_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_by_seeker_and_job(
        mut self,
        seeker_id: AccountId,
        job_id: JobId,
        result: Option<ApplicationRequest>,
    ) -> Self {
        self.expect_get_by_seeker_and_job()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(seeker_id),
                mockall::predicate::eq(job_id),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_by_seeker(
        mut self,
        seeker_id: AccountId,
        result: Vec<ApplicationRequest>,
    ) -> Self {
        self.expect_list_by_seeker()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(seeker_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_by_job(mut self, job_id: JobId, result: Vec<ApplicationRequest>) -> Self {
        self.expect_list_by_job()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(job_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create(
        mut self,
        request: ApplicationRequest,
        result: Result<(), ApplicationRepoError>,
    ) -> Self {
        self.expect_create()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(request),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_resolve(
        mut self,
        request_id: ApplicationRequestId,
        resolution: ApplicationResolution,
        result: bool,
    ) -> Self {
        self.expect_resolve()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(request_id),
                mockall::predicate::eq(resolution),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
