use anyhow::Context;
use jobboard_core_application_contracts::{
    ApplicationApplyError, ApplicationFeatureService, ApplicationGetError,
    ApplicationListForJobError, ApplicationListForSeekerError, ApplicationRespondError,
    ApplicationToggleActiveError,
};
use jobboard_core_catalog_contracts::ownership::JobOwnershipService;
use jobboard_core_notification_contracts::notification::NotificationService;
use jobboard_di::Build;
use jobboard_models::{
    account::{AccountId, AccountRole},
    application::{
        ApplicationDecision, ApplicationRequest, ApplicationRequestId, ApplicationResolution,
        ApplicationStatus, CoverLetter, ResponseText,
    },
    job::{JobId, JobPostingPatch},
    notification::NotificationText,
};
use jobboard_persistence_contracts::{
    account::AccountRepository,
    application::{ApplicationRepoError, ApplicationRepository},
    catalog::CatalogRepository,
    Database, TransactionExt,
};
use jobboard_shared_contracts::{id::IdService, time::TimeService};
use jobboard_utils::trace_instrument;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct ApplicationFeatureServiceImpl<
    Db,
    Id,
    Time,
    JobOwnership,
    Notification,
    AccountRepo,
    CatalogRepo,
    ApplicationRepo,
> {
    db: Db,
    id: Id,
    time: Time,
    job_ownership: JobOwnership,
    notification: Notification,
    account_repo: AccountRepo,
    catalog_repo: CatalogRepo,
    application_repo: ApplicationRepo,
}

impl<Db, Id, Time, JobOwnership, Notification, AccountRepo, CatalogRepo, ApplicationRepo>
    ApplicationFeatureService
    for ApplicationFeatureServiceImpl<
        Db,
        Id,
        Time,
        JobOwnership,
        Notification,
        AccountRepo,
        CatalogRepo,
        ApplicationRepo,
    >
where
    Db: Database,
    Id: IdService,
    Time: TimeService,
    JobOwnership: JobOwnershipService<Db::Transaction>,
    Notification: NotificationService<Db::Transaction>,
    AccountRepo: AccountRepository<Db::Transaction>,
    CatalogRepo: CatalogRepository<Db::Transaction>,
    ApplicationRepo: ApplicationRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn apply(
        &self,
        seeker_id: AccountId,
        job_id: JobId,
        cover_letter: Option<CoverLetter>,
    ) -> Result<ApplicationRequest, ApplicationApplyError> {
        let mut txn = self.db.begin_transaction().await?;

        let result = async {
            if !self.is_seeker(&mut txn, seeker_id).await? {
                return Err(ApplicationApplyError::SeekerNotFound);
            }

            let job = self
                .catalog_repo
                .get_job(&mut txn, job_id)
                .await
                .context("Failed to get job posting from database")?
                .ok_or(ApplicationApplyError::JobNotFound)?;

            let now = self.time.now();
            if !job.is_open(now) {
                return Err(ApplicationApplyError::JobClosed);
            }

            let existing = self
                .application_repo
                .get_by_seeker_and_job(&mut txn, seeker_id, job_id)
                .await
                .context("Failed to get application request from database")?;
            if existing.is_some() {
                return Err(ApplicationApplyError::AlreadyApplied);
            }

            let request = ApplicationRequest {
                id: self.id.generate(),
                seeker_id,
                job_id,
                status: ApplicationStatus::Pending,
                cover_letter,
                submitted_at: now,
                response: None,
                responded_at: None,
            };

            self.application_repo
                .create(&mut txn, &request)
                .await
                .map_err(|err| match err {
                    ApplicationRepoError::Conflict => ApplicationApplyError::AlreadyApplied,
                    ApplicationRepoError::Other(err) => err
                        .context("Failed to create application request in database")
                        .into(),
                })?;

            let text = format!("New application received for \"{}\"", job.title);
            self.notification
                .broadcast(
                    &mut txn,
                    job.company_id,
                    seeker_id,
                    NotificationText::from_string_truncated(text),
                )
                .await?;

            tracing::info!(request_id = %request.id, "application submitted");

            Ok::<_, ApplicationApplyError>(request)
        }
        .await;

        txn.finish(result).await
    }

    #[trace_instrument(skip(self))]
    async fn respond(
        &self,
        employer_id: AccountId,
        request_id: ApplicationRequestId,
        decision: ApplicationDecision,
        response: ResponseText,
    ) -> Result<ApplicationRequest, ApplicationRespondError> {
        let mut txn = self.db.begin_transaction().await?;

        let result = async {
            let employee = self
                .account_repo
                .get_employee(&mut txn, employer_id)
                .await
                .context("Failed to get employee from database")?
                .ok_or(ApplicationRespondError::NotAnEmployee)?;

            let request = self
                .application_repo
                .get(&mut txn, request_id)
                .await
                .context("Failed to get application request from database")?
                .ok_or(ApplicationRespondError::NotFound)?;

            let job = self
                .catalog_repo
                .get_job(&mut txn, request.job_id)
                .await
                .context("Failed to get job posting from database")?
                .context("Job posting of application request not found")?;
            if job.company_id != employee.company_id {
                return Err(ApplicationRespondError::NotJobOwner);
            }

            if request.status.is_terminal() {
                return Err(ApplicationRespondError::AlreadyResolved);
            }

            let resolution = ApplicationResolution {
                status: decision.into(),
                response,
                responded_at: self.time.now(),
            };

            let resolved = self
                .application_repo
                .resolve(&mut txn, request_id, &resolution)
                .await
                .context("Failed to resolve application request in database")?;
            if !resolved {
                return Err(ApplicationRespondError::AlreadyResolved);
            }

            let text = response_text(&job.title, &resolution);
            self.notification
                .send_individual(
                    &mut txn,
                    request.seeker_id,
                    employer_id,
                    NotificationText::from_string_truncated(text),
                )
                .await?;

            tracing::info!(
                request_id = %request_id,
                status = resolution.status.as_str(),
                "application resolved"
            );

            Ok::<_, ApplicationRespondError>(ApplicationRequest {
                status: resolution.status,
                response: Some(resolution.response),
                responded_at: Some(resolution.responded_at),
                ..request
            })
        }
        .await;

        txn.finish(result).await
    }

    #[trace_instrument(skip(self))]
    async fn toggle_active(
        &self,
        employer_id: AccountId,
        job_id: JobId,
        active: bool,
    ) -> Result<(), ApplicationToggleActiveError> {
        let mut txn = self.db.begin_transaction().await?;

        let result = async {
            let entry = self
                .job_ownership
                .authorize(&mut txn, employer_id, job_id)
                .await?;

            if entry.job.active == active {
                return Ok(());
            }

            self.catalog_repo
                .update_job(&mut txn, job_id, &JobPostingPatch::new().update_active(active))
                .await
                .context("Failed to update job posting in database")?;

            let verb = if active { "activated" } else { "deactivated" };
            let text = format!("Job posting \"{}\" was {verb}", entry.job.title);
            self.notification
                .broadcast(
                    &mut txn,
                    entry.job.company_id,
                    employer_id,
                    NotificationText::from_string_truncated(text),
                )
                .await?;

            tracing::info!(job_id = %job_id, active, "job toggled");

            Ok::<_, ApplicationToggleActiveError>(())
        }
        .await;

        txn.finish(result).await
    }

    #[trace_instrument(skip(self))]
    async fn get_application(
        &self,
        actor_id: AccountId,
        request_id: ApplicationRequestId,
    ) -> Result<ApplicationRequest, ApplicationGetError> {
        let mut txn = self.db.begin_transaction().await?;

        let request = self
            .application_repo
            .get(&mut txn, request_id)
            .await
            .context("Failed to get application request from database")?
            .ok_or(ApplicationGetError::NotFound)?;

        if request.seeker_id == actor_id {
            return Ok(request);
        }

        let Some(employee) = self
            .account_repo
            .get_employee(&mut txn, actor_id)
            .await
            .context("Failed to get employee from database")?
        else {
            return Err(ApplicationGetError::NotFound);
        };

        let owned = self
            .catalog_repo
            .get_job(&mut txn, request.job_id)
            .await
            .context("Failed to get job posting from database")?
            .is_some_and(|job| job.company_id == employee.company_id);

        owned
            .then_some(request)
            .ok_or(ApplicationGetError::NotFound)
    }

    #[trace_instrument(skip(self))]
    async fn list_for_seeker(
        &self,
        seeker_id: AccountId,
    ) -> Result<Vec<ApplicationRequest>, ApplicationListForSeekerError> {
        let mut txn = self.db.begin_transaction().await?;

        if !self.is_seeker(&mut txn, seeker_id).await? {
            return Err(ApplicationListForSeekerError::SeekerNotFound);
        }

        self.application_repo
            .list_by_seeker(&mut txn, seeker_id)
            .await
            .context("Failed to get application requests from database")
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn list_for_job(
        &self,
        employer_id: AccountId,
        job_id: JobId,
    ) -> Result<Vec<ApplicationRequest>, ApplicationListForJobError> {
        let mut txn = self.db.begin_transaction().await?;

        self.job_ownership
            .authorize(&mut txn, employer_id, job_id)
            .await?;

        self.application_repo
            .list_by_job(&mut txn, job_id)
            .await
            .context("Failed to get application requests from database")
            .map_err(Into::into)
    }
}

impl<Db, Id, Time, JobOwnership, Notification, AccountRepo, CatalogRepo, ApplicationRepo>
    ApplicationFeatureServiceImpl<
        Db,
        Id,
        Time,
        JobOwnership,
        Notification,
        AccountRepo,
        CatalogRepo,
        ApplicationRepo,
    >
where
    Db: Database,
    AccountRepo: AccountRepository<Db::Transaction>,
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
}

fn response_text(job_title: &str, resolution: &ApplicationResolution) -> String {
    let mut text = format!(
        "Your application for \"{job_title}\" was {}",
        resolution.status.as_str()
    );
    if !resolution.response.is_empty() {
        text.push_str(": ");
        text.push_str(&resolution.response);
    }
    text
}

