use std::future::Future;

use jobboard_models::{
    account::AccountId,
    error_code,
    job::{JobCategory, JobCategoryId},
    ranking::RankedJob,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MatchingFeatureService: Send + Sync + 'static {
    /// Return the open postings the seeker has not applied to yet, best
    /// matches first.
    ///
    /// With preferences, postings sharing neither a category nor a field
    /// with them are left out. Without preferences every candidate is
    /// returned, ordered by company rating and recency.
    fn rank(
        &self,
        seeker_id: AccountId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<RankedJob>, MatchingRankError>> + Send;

    /// Return the preferred categories of a seeker.
    fn get_preferences(
        &self,
        seeker_id: AccountId,
    ) -> impl Future<Output = Result<Vec<JobCategory>, MatchingGetPreferencesError>> + Send;

    /// Replace the preferred categories of a seeker.
    fn set_preferences(
        &self,
        seeker_id: AccountId,
        category_ids: Vec<JobCategoryId>,
    ) -> impl Future<Output = Result<Vec<JobCategory>, MatchingSetPreferencesError>> + Send;
}

#[derive(Debug, Error)]
pub enum MatchingRankError {
    #[error("The limit must be a positive integer.")]
    InvalidLimit,
    #[error("The seeker does not exist.")]
    SeekerNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(MatchingRankError {
    Self::InvalidLimit => Validation("invalid_limit"),
    Self::SeekerNotFound => NotFound("seeker_not_found"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum MatchingGetPreferencesError {
    #[error("The seeker does not exist.")]
    SeekerNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(MatchingGetPreferencesError {
    Self::SeekerNotFound => NotFound("seeker_not_found"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum MatchingSetPreferencesError {
    #[error("The seeker does not exist.")]
    SeekerNotFound,
    #[error("At least one of the job categories does not exist.")]
    CategoryNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(MatchingSetPreferencesError {
    Self::SeekerNotFound => NotFound("seeker_not_found"),
    Self::CategoryNotFound => NotFound("category_not_found"),
    Self::Other(_) => Transient("internal_error"),
});

#[cfg(feature = "mock")]
impl MockMatchingFeatureService {
    pub fn with_rank(
        mut self,
        seeker_id: AccountId,
        limit: usize,
        result: Result<Vec<RankedJob>, MatchingRankError>,
    ) -> Self {
        self.expect_rank()
            .once()
            .with(
                mockall::predicate::eq(seeker_id),
                mockall::predicate::eq(limit),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
