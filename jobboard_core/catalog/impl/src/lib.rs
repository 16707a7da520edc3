use anyhow::Context;
use jobboard_core_catalog_contracts::{
    ownership::JobOwnershipService, CatalogCreateJobError, CatalogDeleteJobError,
    CatalogFeatureService, CatalogGetJobError, CatalogListSavedError, CatalogToggleSavedError,
    CatalogUpdateJobError, JobCreateCommand, JobUpdateCommand,
};
use jobboard_core_notification_contracts::notification::NotificationService;
use jobboard_di::Build;
use jobboard_models::{
    account::{AccountId, AccountRole},
    application::SavedJob,
    job::{
        CatalogEntry, CategoryField, JobCategory, JobCategoryId, JobId, JobPosting,
        JobPostingPatch, JobPredicate,
    },
    notification::NotificationText,
    pagination::{Page, PaginationSlice},
};
use jobboard_persistence_contracts::{
    account::AccountRepository, catalog::CatalogRepository, saved::SavedJobRepository, Database,
    TransactionExt,
};
use jobboard_shared_contracts::{id::IdService, time::TimeService};
use jobboard_utils::{
    patch::{Patch, PatchValue},
    trace_instrument,
};

pub mod ownership;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct CatalogFeatureServiceImpl<
    Db,
    Id,
    Time,
    JobOwnership,
    Notification,
    AccountRepo,
    CatalogRepo,
    SavedJobRepo,
> {
    db: Db,
    id: Id,
    time: Time,
    job_ownership: JobOwnership,
    notification: Notification,
    account_repo: AccountRepo,
    catalog_repo: CatalogRepo,
    saved_job_repo: SavedJobRepo,
}

impl<Db, Id, Time, JobOwnership, Notification, AccountRepo, CatalogRepo, SavedJobRepo>
    CatalogFeatureService
    for CatalogFeatureServiceImpl<
        Db,
        Id,
        Time,
        JobOwnership,
        Notification,
        AccountRepo,
        CatalogRepo,
        SavedJobRepo,
    >
where
    Db: Database,
    Id: IdService,
    Time: TimeService,
    JobOwnership: JobOwnershipService<Db::Transaction>,
    Notification: NotificationService<Db::Transaction>,
    AccountRepo: AccountRepository<Db::Transaction>,
    CatalogRepo: CatalogRepository<Db::Transaction>,
    SavedJobRepo: SavedJobRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn list_fields(&self) -> anyhow::Result<Vec<CategoryField>> {
        let mut txn = self.db.begin_transaction().await?;

        self.catalog_repo
            .list_fields(&mut txn)
            .await
            .context("Failed to get category fields from database")
    }

    #[trace_instrument(skip(self))]
    async fn list_categories(&self) -> anyhow::Result<Vec<JobCategory>> {
        let mut txn = self.db.begin_transaction().await?;

        self.catalog_repo
            .list_categories(&mut txn)
            .await
            .context("Failed to get job categories from database")
    }

    #[trace_instrument(skip(self))]
    async fn get_job(&self, job_id: JobId) -> Result<CatalogEntry, CatalogGetJobError> {
        let mut txn = self.db.begin_transaction().await?;

        self.catalog_repo
            .get_entry(&mut txn, job_id)
            .await
            .context("Failed to get job posting from database")?
            .ok_or(CatalogGetJobError::NotFound)
    }

    #[trace_instrument(skip(self))]
    async fn list_jobs(
        &self,
        predicate: JobPredicate,
        pagination: PaginationSlice,
    ) -> anyhow::Result<Page<CatalogEntry>> {
        let mut txn = self.db.begin_transaction().await?;

        let total = self
            .catalog_repo
            .count(&mut txn, &predicate)
            .await
            .context("Failed to count job postings")?;

        let items = self
            .catalog_repo
            .list_entries(&mut txn, &predicate, Some(pagination))
            .await
            .context("Failed to get job postings from database")?;

        Ok(Page { total, items })
    }

    #[trace_instrument(skip(self))]
    async fn create_job(
        &self,
        employer_id: AccountId,
        cmd: JobCreateCommand,
    ) -> Result<CatalogEntry, CatalogCreateJobError> {
        let mut txn = self.db.begin_transaction().await?;

        let result = async {
            let employee = self
                .account_repo
                .get_employee(&mut txn, employer_id)
                .await
                .context("Failed to get employee from database")?
                .ok_or(CatalogCreateJobError::NotAnEmployee)?;

            let categories = self
                .resolve_categories(&mut txn, cmd.categories)
                .await?
                .ok_or(CatalogCreateJobError::CategoryNotFound)?;

            let job = JobPosting {
                id: self.id.generate(),
                company_id: employee.company_id,
                title: cmd.title,
                description: cmd.description,
                salary: cmd.salary,
                quantity: cmd.quantity,
                active: true,
                closing_at: cmd.closing_at,
                posted_at: self.time.now(),
            };

            self.catalog_repo
                .create_job(&mut txn, &job)
                .await
                .context("Failed to create job posting in database")?;

            if !categories.is_empty() {
                self.catalog_repo
                    .set_job_categories(&mut txn, job.id, category_ids(&categories))
                    .await
                    .context("Failed to set job categories")?;
            }

            let text = format!("New job posting \"{}\" was created", job.title);
            self.notification
                .broadcast(
                    &mut txn,
                    job.company_id,
                    employer_id,
                    NotificationText::from_string_truncated(text),
                )
                .await?;

            let entry = self
                .catalog_repo
                .get_entry(&mut txn, job.id)
                .await
                .context("Failed to get job posting from database")?
                .context("Created job posting disappeared")?;

            Ok::<_, CatalogCreateJobError>(entry)
        }
        .await;

        txn.finish(result).await
    }

    #[trace_instrument(skip(self))]
    async fn update_job(
        &self,
        employer_id: AccountId,
        job_id: JobId,
        cmd: JobUpdateCommand,
    ) -> Result<CatalogEntry, CatalogUpdateJobError> {
        let mut txn = self.db.begin_transaction().await?;

        let result = async {
            let mut entry = self
                .job_ownership
                .authorize(&mut txn, employer_id, job_id)
                .await?;

            let patch = JobPostingPatch {
                active: PatchValue::Unchanged,
                ..cmd.patch
            }
            .minimize(&entry.job);

            let categories = match cmd.categories {
                Some(ids) => {
                    let categories = self
                        .resolve_categories(&mut txn, ids)
                        .await?
                        .ok_or(CatalogUpdateJobError::CategoryNotFound)?;
                    (categories != entry.categories).then_some(categories)
                }
                None => None,
            };

            if patch.is_unchanged() && categories.is_none() {
                return Ok(entry);
            }

            if patch.is_update() {
                self.catalog_repo
                    .update_job(&mut txn, job_id, &patch)
                    .await
                    .context("Failed to update job posting in database")?;
                entry.job = entry.job.update(patch);
            }

            if let Some(categories) = categories {
                self.catalog_repo
                    .set_job_categories(&mut txn, job_id, category_ids(&categories))
                    .await
                    .context("Failed to set job categories")?;
                entry.categories = categories;
            }

            let text = format!("Job posting \"{}\" was updated", entry.job.title);
            self.notification
                .broadcast(
                    &mut txn,
                    entry.job.company_id,
                    employer_id,
                    NotificationText::from_string_truncated(text),
                )
                .await?;

            Ok::<_, CatalogUpdateJobError>(entry)
        }
        .await;

        txn.finish(result).await
    }

    #[trace_instrument(skip(self))]
    async fn delete_job(
        &self,
        employer_id: AccountId,
        job_id: JobId,
    ) -> Result<(), CatalogDeleteJobError> {
        let mut txn = self.db.begin_transaction().await?;

        let result = async {
            let entry = self
                .job_ownership
                .authorize(&mut txn, employer_id, job_id)
                .await?;

            self.catalog_repo
                .delete_job(&mut txn, job_id)
                .await
                .context("Failed to delete job posting from database")?;

            let text = format!("Job posting \"{}\" was removed", entry.job.title);
            self.notification
                .broadcast(
                    &mut txn,
                    entry.job.company_id,
                    employer_id,
                    NotificationText::from_string_truncated(text),
                )
                .await?;

            Ok::<_, CatalogDeleteJobError>(())
        }
        .await;

        txn.finish(result).await
    }

    #[trace_instrument(skip(self))]
    async fn toggle_saved(
        &self,
        seeker_id: AccountId,
        job_id: JobId,
    ) -> Result<bool, CatalogToggleSavedError> {
        let mut txn = self.db.begin_transaction().await?;

        let result = async {
            if !self.is_seeker(&mut txn, seeker_id).await? {
                return Err(CatalogToggleSavedError::SeekerNotFound);
            }

            self.catalog_repo
                .get_job(&mut txn, job_id)
                .await
                .context("Failed to get job posting from database")?
                .ok_or(CatalogToggleSavedError::JobNotFound)?;

            let removed = self
                .saved_job_repo
                .delete(&mut txn, seeker_id, job_id)
                .await
                .context("Failed to delete saved job from database")?;
            if removed {
                return Ok(false);
            }

            let saved_job = SavedJob {
                seeker_id,
                job_id,
                saved_at: self.time.now(),
            };
            self.saved_job_repo
                .save(&mut txn, &saved_job)
                .await
                .context("Failed to save job in database")?;

            Ok::<_, CatalogToggleSavedError>(true)
        }
        .await;

        txn.finish(result).await
    }

    #[trace_instrument(skip(self))]
    async fn list_saved(
        &self,
        seeker_id: AccountId,
    ) -> Result<Vec<SavedJob>, CatalogListSavedError> {
        let mut txn = self.db.begin_transaction().await?;

        if !self.is_seeker(&mut txn, seeker_id).await? {
            return Err(CatalogListSavedError::SeekerNotFound);
        }

        self.saved_job_repo
            .list(&mut txn, seeker_id)
            .await
            .context("Failed to get saved jobs from database")
            .map_err(Into::into)
    }
}

impl<Db, Id, Time, JobOwnership, Notification, AccountRepo, CatalogRepo, SavedJobRepo>
    CatalogFeatureServiceImpl<
        Db,
        Id,
        Time,
        JobOwnership,
        Notification,
        AccountRepo,
        CatalogRepo,
        SavedJobRepo,
    >
where
    Db: Database,
    AccountRepo: AccountRepository<Db::Transaction>,
    CatalogRepo: CatalogRepository<Db::Transaction>,
{
    async fn is_seeker(
        &self,
        txn: &mut Db::Transaction,
        account_id: AccountId,
    ) -> anyhow::Result<bool> {
        let account = self
            .account_repo
            .get(txn, account_id)
            .await
            .context("Failed to get account from database")?;
        Ok(account.is_some_and(|account| account.role == AccountRole::Seeker))
    }

    /// Loads the categories with the given ids, ignoring duplicates.
    ///
    /// Returns `None` if any of them does not exist.
    async fn resolve_categories(
        &self,
        txn: &mut Db::Transaction,
        mut category_ids: Vec<JobCategoryId>,
    ) -> anyhow::Result<Option<Vec<JobCategory>>> {
        category_ids.sort_unstable();
        category_ids.dedup();

        if category_ids.is_empty() {
            return Ok(Some(Vec::new()));
        }

        let expected = category_ids.len();
        let mut categories = self
            .catalog_repo
            .get_categories(txn, category_ids)
            .await
            .context("Failed to get job categories from database")?;
        if categories.len() != expected {
            return Ok(None);
        }

        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(Some(categories))
    }
}

fn category_ids(categories: &[JobCategory]) -> Vec<JobCategoryId> {
    categories.iter().map(|category| category.id).collect()
}
