use std::future::Future;

use jobboard_models::{
    job::{
        CatalogEntry, CategoryField, JobCategory, JobCategoryId, JobId, JobPosting,
        JobPostingPatch, JobPredicate,
    },
    pagination::PaginationSlice,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CatalogRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Return all category fields ordered by name.
    fn list_fields(
        &self,
        txn: &mut Txn,
    ) -> impl Future<Output = anyhow::Result<Vec<CategoryField>>> + Send;

    /// Create a new category field.
    fn create_field(
        &self,
        txn: &mut Txn,
        field: &CategoryField,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Return all job categories ordered by name.
    fn list_categories(
        &self,
        txn: &mut Txn,
    ) -> impl Future<Output = anyhow::Result<Vec<JobCategory>>> + Send;

    /// Create a new job category.
    fn create_category(
        &self,
        txn: &mut Txn,
        category: &JobCategory,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Return the categories with the given ids. Unknown ids are skipped.
    fn get_categories(
        &self,
        txn: &mut Txn,
        category_ids: Vec<JobCategoryId>,
    ) -> impl Future<Output = anyhow::Result<Vec<JobCategory>>> + Send;

    /// Return the job posting with the given id.
    fn get_job(
        &self,
        txn: &mut Txn,
        job_id: JobId,
    ) -> impl Future<Output = anyhow::Result<Option<JobPosting>>> + Send;

    /// Return the job posting with the given id together with its categories
    /// and the rating of its company.
    fn get_entry(
        &self,
        txn: &mut Txn,
        job_id: JobId,
    ) -> impl Future<Output = anyhow::Result<Option<CatalogEntry>>> + Send;

    /// Return the entries matching `predicate`, newest first.
    ///
    /// Without a `pagination` slice every matching entry is returned.
    fn list_entries(
        &self,
        txn: &mut Txn,
        predicate: &JobPredicate,
        pagination: Option<PaginationSlice>,
    ) -> impl Future<Output = anyhow::Result<Vec<CatalogEntry>>> + Send;

    /// Return the number of postings matching `predicate`.
    fn count(
        &self,
        txn: &mut Txn,
        predicate: &JobPredicate,
    ) -> impl Future<Output = anyhow::Result<u64>> + Send;

    /// Create a new job posting.
    fn create_job(
        &self,
        txn: &mut Txn,
        job: &JobPosting,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Update an existing job posting.
    fn update_job(
        &self,
        txn: &mut Txn,
        job_id: JobId,
        patch: &JobPostingPatch,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Delete a job posting together with its category links, application
    /// requests and bookmarks.
    fn delete_job(
        &self,
        txn: &mut Txn,
        job_id: JobId,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Replace the categories of a job posting.
    fn set_job_categories(
        &self,
        txn: &mut Txn,
        job_id: JobId,
        category_ids: Vec<JobCategoryId>,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockCatalogRepository<Txn> {
    pub fn with_get_categories(
        mut self,
        category_ids: Vec<JobCategoryId>,
        result: Vec<JobCategory>,
    ) -> Self {
        self.expect_get_categories()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(category_ids),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_job(mut self, job_id: JobId, result: Option<JobPosting>) -> Self {
        self.expect_get_job()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(job_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_entry(mut self, job_id: JobId, result: Option<CatalogEntry>) -> Self {
        self.expect_get_entry()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(job_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_entries(
        mut self,
        predicate: JobPredicate,
        pagination: Option<PaginationSlice>,
        result: Vec<CatalogEntry>,
    ) -> Self {
        self.expect_list_entries()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(predicate),
                mockall::predicate::eq(pagination),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_count(mut self, predicate: JobPredicate, result: u64) -> Self {
        self.expect_count()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(predicate),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create_job(mut self, job: JobPosting) -> Self {
        self.expect_create_job()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(job))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_update_job(mut self, job_id: JobId, patch: JobPostingPatch, result: bool) -> Self {
        self.expect_update_job()
            .once()
            .withf(move |_, id, p| *id == job_id && *p == patch)
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_delete_job(mut self, job_id: JobId, result: bool) -> Self {
        self.expect_delete_job()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(job_id),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_set_job_categories(
        mut self,
        job_id: JobId,
        category_ids: Vec<JobCategoryId>,
    ) -> Self {
        self.expect_set_job_categories()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(job_id),
                mockall::predicate::eq(category_ids),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(()))));
        self
    }
}
