use std::future::Future;

use jobboard_models::{
    account::AccountId,
    job::{JobCategory, JobCategoryId},
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PreferenceRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return the preferred categories of a seeker.
    fn list(
        &self,
        txn: &mut Txn,
        seeker_id: AccountId,
    ) -> impl Future<Output = anyhow::Result<Vec<JobCategory>>> + Send;

    /// Replace the preference set of a seeker.
    ///
    /// `category_ids` must not contain duplicates.
    fn replace(
        &self,
        txn: &mut Txn,
        seeker_id: AccountId,
        category_ids: Vec<JobCategoryId>,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockPreferenceRepository<Txn> {
    pub fn with_list(mut self, seeker_id: AccountId, result: Vec<JobCategory>) -> Self {
        self.expect_list()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(seeker_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_replace(mut self, seeker_id: AccountId, category_ids: Vec<JobCategoryId>) -> Self {
        self.expect_replace()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(seeker_id),
                mockall::predicate::eq(category_ids),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(()))));
        self
    }
}
