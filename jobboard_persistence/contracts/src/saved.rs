use std::future::Future;

use jobboard_models::{account::AccountId, application::SavedJob, job::JobId};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SavedJobRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return the bookmarks of a seeker, newest first.
    fn list(
        &self,
        txn: &mut Txn,
        seeker_id: AccountId,
    ) -> impl Future<Output = anyhow::Result<Vec<SavedJob>>> + Send;

    /// Save a bookmark. Returns `false` if it already existed.
    fn save(
        &self,
        txn: &mut Txn,
        saved_job: &SavedJob,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Delete a bookmark. Returns `false` if it did not exist.
    fn delete(
        &self,
        txn: &mut Txn,
        seeker_id: AccountId,
        job_id: JobId,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockSavedJobRepository<Txn> {
    pub fn with_list(mut self, seeker_id: AccountId, result: Vec<SavedJob>) -> Self {
        self.expect_list()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(seeker_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_save(mut self, saved_job: SavedJob, result: bool) -> Self {
        self.expect_save()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(saved_job),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_delete(mut self, seeker_id: AccountId, job_id: JobId, result: bool) -> Self {
        self.expect_delete()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(seeker_id),
                mockall::predicate::eq(job_id),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
