use std::future::Future;

use jobboard_core_catalog_contracts::ownership::JobOwnershipError;
use jobboard_models::{
    account::AccountId,
    application::{
        ApplicationDecision, ApplicationRequest, ApplicationRequestId, CoverLetter, ResponseText,
    },
    error_code,
    job::JobId,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ApplicationFeatureService: Send + Sync + 'static {
    /// Submit an application request for an open job posting and notify the
    /// job's company.
    fn apply(
        &self,
        seeker_id: AccountId,
        job_id: JobId,
        cover_letter: Option<CoverLetter>,
    ) -> impl Future<Output = Result<ApplicationRequest, ApplicationApplyError>> + Send;

    /// Accept or reject a pending application request and notify the seeker.
    fn respond(
        &self,
        employer_id: AccountId,
        request_id: ApplicationRequestId,
        decision: ApplicationDecision,
        response: ResponseText,
    ) -> impl Future<Output = Result<ApplicationRequest, ApplicationRespondError>> + Send;

    /// Open or close a job posting for new applications.
    ///
    /// Setting the current value again succeeds without any effect.
    fn toggle_active(
        &self,
        employer_id: AccountId,
        job_id: JobId,
        active: bool,
    ) -> impl Future<Output = Result<(), ApplicationToggleActiveError>> + Send;

    /// Return an application request visible to the actor.
    ///
    /// A request is visible to the seeker who submitted it and to every
    /// employee of the company owning the job.
    fn get_application(
        &self,
        actor_id: AccountId,
        request_id: ApplicationRequestId,
    ) -> impl Future<Output = Result<ApplicationRequest, ApplicationGetError>> + Send;

    /// Return the application requests of a seeker, newest first.
    fn list_for_seeker(
        &self,
        seeker_id: AccountId,
    ) -> impl Future<Output = Result<Vec<ApplicationRequest>, ApplicationListForSeekerError>> + Send;

    /// Return the application requests for a job posting of the employer's
    /// company, newest first.
    fn list_for_job(
        &self,
        employer_id: AccountId,
        job_id: JobId,
    ) -> impl Future<Output = Result<Vec<ApplicationRequest>, ApplicationListForJobError>> + Send;
}

#[derive(Debug, Error)]
pub enum ApplicationApplyError {
    #[error("The seeker does not exist.")]
    SeekerNotFound,
    #[error("The job posting does not exist.")]
    JobNotFound,
    #[error("The job posting does not accept applications.")]
    JobClosed,
    #[error("The seeker has already applied for this job.")]
    AlreadyApplied,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(ApplicationApplyError {
    Self::SeekerNotFound => NotFound("seeker_not_found"),
    Self::JobNotFound => NotFound("job_not_found"),
    Self::JobClosed => Conflict("job_closed"),
    Self::AlreadyApplied => Conflict("already_applied"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum ApplicationRespondError {
    #[error("The account is not an employee of any company.")]
    NotAnEmployee,
    #[error("The application request does not exist.")]
    NotFound,
    #[error("The job posting belongs to another company.")]
    NotJobOwner,
    #[error("The application request has already been resolved.")]
    AlreadyResolved,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(ApplicationRespondError {
    Self::NotAnEmployee => Authorization("not_an_employee"),
    Self::NotFound => NotFound("application_not_found"),
    Self::NotJobOwner => Authorization("not_job_owner"),
    Self::AlreadyResolved => Conflict("already_resolved"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum ApplicationToggleActiveError {
    #[error(transparent)]
    Ownership(#[from] JobOwnershipError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(ApplicationToggleActiveError {
    Self::Ownership(JobOwnershipError::NotAnEmployee) => Authorization("not_an_employee"),
    Self::Ownership(JobOwnershipError::JobNotFound) => NotFound("job_not_found"),
    Self::Ownership(JobOwnershipError::NotJobOwner) => Authorization("not_job_owner"),
    Self::Ownership(JobOwnershipError::Other(_)) | Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum ApplicationGetError {
    #[error("The application request does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(ApplicationGetError {
    Self::NotFound => NotFound("application_not_found"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum ApplicationListForSeekerError {
    #[error("The seeker does not exist.")]
    SeekerNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(ApplicationListForSeekerError {
    Self::SeekerNotFound => NotFound("seeker_not_found"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum ApplicationListForJobError {
    #[error(transparent)]
    Ownership(#[from] JobOwnershipError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(ApplicationListForJobError {
    Self::Ownership(JobOwnershipError::NotAnEmployee) => Authorization("not_an_employee"),
    Self::Ownership(JobOwnershipError::JobNotFound) => NotFound("job_not_found"),
    Self::Ownership(JobOwnershipError::NotJobOwner) => Authorization("not_job_owner"),
    Self::Ownership(JobOwnershipError::Other(_)) | Self::Other(_) => Transient("internal_error"),
});

#[cfg(feature = "mock")]
impl MockApplicationFeatureService {
    pub fn with_apply(
        mut self,
        seeker_id: AccountId,
        job_id: JobId,
        cover_letter: Option<CoverLetter>,
        result: Result<ApplicationRequest, ApplicationApplyError>,
    ) -> Self {
        self.expect_apply()
            .once()
            .with(
                mockall::predicate::eq(seeker_id),
                mockall::predicate::eq(job_id),
                mockall::predicate::eq(cover_letter),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_respond(
        mut self,
        employer_id: AccountId,
        request_id: ApplicationRequestId,
        decision: ApplicationDecision,
        response: ResponseText,
        result: Result<ApplicationRequest, ApplicationRespondError>,
    ) -> Self {
        self.expect_respond()
            .once()
            .with(
                mockall::predicate::eq(employer_id),
                mockall::predicate::eq(request_id),
                mockall::predicate::eq(decision),
                mockall::predicate::eq(response),
            )
            .return_once(|_, _, _, _| Box::pin(std::future::ready(result)));
        self
    }
}
