use std::future::Future;

use chrono::{DateTime, Utc};
use jobboard_models::{
    account::AccountId,
    application::SavedJob,
    error_code,
    job::{
        CatalogEntry, CategoryField, JobCategory, JobCategoryId, JobDescription, JobId,
        JobPostingPatch, JobPredicate, JobQuantity, JobTitle,
    },
    pagination::{Page, PaginationSlice},
};
use ownership::JobOwnershipError;
use thiserror::Error;

pub mod ownership;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CatalogFeatureService: Send + Sync + 'static {
    /// Return all category fields.
    fn list_fields(&self) -> impl Future<Output = anyhow::Result<Vec<CategoryField>>> + Send;

    /// Return all job categories.
    fn list_categories(&self) -> impl Future<Output = anyhow::Result<Vec<JobCategory>>> + Send;

    /// Return a single job posting with its categories and company rating.
    fn get_job(
        &self,
        job_id: JobId,
    ) -> impl Future<Output = Result<CatalogEntry, CatalogGetJobError>> + Send;

    /// Return the postings matching `predicate`, newest first.
    fn list_jobs(
        &self,
        predicate: JobPredicate,
        pagination: PaginationSlice,
    ) -> impl Future<Output = anyhow::Result<Page<CatalogEntry>>> + Send;

    /// Create a new active job posting for the employer's company and
    /// announce it to the company.
    fn create_job(
        &self,
        employer_id: AccountId,
        cmd: JobCreateCommand,
    ) -> impl Future<Output = Result<CatalogEntry, CatalogCreateJobError>> + Send;

    /// Update a job posting of the employer's company.
    ///
    /// A command that would not change anything is accepted without writing
    /// or announcing anything.
    fn update_job(
        &self,
        employer_id: AccountId,
        job_id: JobId,
        cmd: JobUpdateCommand,
    ) -> impl Future<Output = Result<CatalogEntry, CatalogUpdateJobError>> + Send;

    /// Delete a job posting of the employer's company including its
    /// application requests.
    fn delete_job(
        &self,
        employer_id: AccountId,
        job_id: JobId,
    ) -> impl Future<Output = Result<(), CatalogDeleteJobError>> + Send;

    /// Bookmark a job posting or remove an existing bookmark.
    ///
    /// Returns whether the posting is bookmarked afterwards.
    fn toggle_saved(
        &self,
        seeker_id: AccountId,
        job_id: JobId,
    ) -> impl Future<Output = Result<bool, CatalogToggleSavedError>> + Send;

    /// Return the bookmarks of a seeker, newest first.
    fn list_saved(
        &self,
        seeker_id: AccountId,
    ) -> impl Future<Output = Result<Vec<SavedJob>, CatalogListSavedError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCreateCommand {
    pub title: JobTitle,
    pub description: JobDescription,
    pub salary: Option<i64>,
    pub quantity: JobQuantity,
    pub closing_at: Option<DateTime<Utc>>,
    pub categories: Vec<JobCategoryId>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobUpdateCommand {
    /// Changes to the posting itself. The active flag is managed separately
    /// and ignored here.
    pub patch: JobPostingPatch,
    /// Replaces the complete set of categories if present.
    pub categories: Option<Vec<JobCategoryId>>,
}

#[derive(Debug, Error)]
pub enum CatalogGetJobError {
    #[error("The job posting does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(CatalogGetJobError {
    Self::NotFound => NotFound("job_not_found"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum CatalogCreateJobError {
    #[error("The account is not an employee of any company.")]
    NotAnEmployee,
    #[error("At least one of the job categories does not exist.")]
    CategoryNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(CatalogCreateJobError {
    Self::NotAnEmployee => Authorization("not_an_employee"),
    Self::CategoryNotFound => NotFound("category_not_found"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum CatalogUpdateJobError {
    #[error(transparent)]
    Ownership(#[from] JobOwnershipError),
    #[error("At least one of the job categories does not exist.")]
    CategoryNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(CatalogUpdateJobError {
    Self::Ownership(JobOwnershipError::NotAnEmployee) => Authorization("not_an_employee"),
    Self::Ownership(JobOwnershipError::JobNotFound) => NotFound("job_not_found"),
    Self::Ownership(JobOwnershipError::NotJobOwner) => Authorization("not_job_owner"),
    Self::CategoryNotFound => NotFound("category_not_found"),
    Self::Ownership(JobOwnershipError::Other(_)) | Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum CatalogDeleteJobError {
    #[error(transparent)]
    Ownership(#[from] JobOwnershipError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(CatalogDeleteJobError {
    Self::Ownership(JobOwnershipError::NotAnEmployee) => Authorization("not_an_employee"),
    Self::Ownership(JobOwnershipError::JobNotFound) => NotFound("job_not_found"),
    Self::Ownership(JobOwnershipError::NotJobOwner) => Authorization("not_job_owner"),
    Self::Ownership(JobOwnershipError::Other(_)) | Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum CatalogToggleSavedError {
    #[error("The seeker does not exist.")]
    SeekerNotFound,
    #[error("The job posting does not exist.")]
    JobNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(CatalogToggleSavedError {
    Self::SeekerNotFound => NotFound("seeker_not_found"),
    Self::JobNotFound => NotFound("job_not_found"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum CatalogListSavedError {
    #[error("The seeker does not exist.")]
    SeekerNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(CatalogListSavedError {
    Self::SeekerNotFound => NotFound("seeker_not_found"),
    Self::Other(_) => Transient("internal_error"),
});
