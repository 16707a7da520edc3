use std::future::Future;

use jobboard_models::{
    account::AccountId,
    company::CompanyId,
    error_code,
    notification::{
        BroadcastNotification, BroadcastNotificationId, EmployeeNotification,
        IndividualNotification, IndividualNotificationId, NotificationText,
    },
};
use thiserror::Error;

pub mod notification;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationFeatureService: Send + Sync + 'static {
    /// Send a notification to a single account.
    fn send_individual(
        &self,
        recipient_id: AccountId,
        sender_id: AccountId,
        text: NotificationText,
    ) -> impl Future<Output = Result<IndividualNotification, NotificationSendIndividualError>> + Send;

    /// Send a notification to every current and future employee of a
    /// company.
    fn broadcast(
        &self,
        company_id: CompanyId,
        sender_id: AccountId,
        text: NotificationText,
    ) -> impl Future<Output = Result<BroadcastNotification, NotificationBroadcastError>> + Send;

    /// Return the broadcasts of the employee's company together with the
    /// employee's read state, newest first.
    fn list_for_employee(
        &self,
        employee_id: AccountId,
    ) -> impl Future<Output = Result<Vec<EmployeeNotification>, NotificationEmployeeError>> + Send;

    /// Mark a broadcast of the employee's company as read.
    fn mark_read(
        &self,
        employee_id: AccountId,
        notification_id: BroadcastNotificationId,
    ) -> impl Future<Output = Result<(), NotificationMarkReadError>> + Send;

    /// Mark every broadcast of the employee's company as read.
    fn mark_all_read(
        &self,
        employee_id: AccountId,
    ) -> impl Future<Output = Result<(), NotificationEmployeeError>> + Send;

    /// Return the number of broadcasts of the employee's company the
    /// employee has not read yet.
    fn unread_count(
        &self,
        employee_id: AccountId,
    ) -> impl Future<Output = Result<u64, NotificationEmployeeError>> + Send;

    /// Return the individual notifications of an account, newest first.
    fn list_individual(
        &self,
        recipient_id: AccountId,
    ) -> impl Future<Output = Result<Vec<IndividualNotification>, NotificationListIndividualError>>
           + Send;

    /// Mark an individual notification as read.
    ///
    /// Only the recipient may do this.
    fn mark_individual_read(
        &self,
        recipient_id: AccountId,
        notification_id: IndividualNotificationId,
    ) -> impl Future<Output = Result<(), NotificationMarkIndividualReadError>> + Send;
}

#[derive(Debug, Error)]
pub enum NotificationSendIndividualError {
    #[error("The recipient does not exist.")]
    RecipientNotFound,
    #[error("The sender does not exist.")]
    SenderNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(NotificationSendIndividualError {
    Self::RecipientNotFound => NotFound("recipient_not_found"),
    Self::SenderNotFound => NotFound("sender_not_found"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum NotificationBroadcastError {
    #[error("The company does not exist.")]
    CompanyNotFound,
    #[error("The sender does not exist.")]
    SenderNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(NotificationBroadcastError {
    Self::CompanyNotFound => NotFound("company_not_found"),
    Self::SenderNotFound => NotFound("sender_not_found"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum NotificationEmployeeError {
    #[error("The account is not an employee of any company.")]
    EmployeeNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(NotificationEmployeeError {
    Self::EmployeeNotFound => NotFound("employee_not_found"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum NotificationMarkReadError {
    #[error("The account is not an employee of any company.")]
    EmployeeNotFound,
    #[error("The notification does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(NotificationMarkReadError {
    Self::EmployeeNotFound => NotFound("employee_not_found"),
    Self::NotFound => NotFound("notification_not_found"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum NotificationListIndividualError {
    #[error("The recipient does not exist.")]
    RecipientNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(NotificationListIndividualError {
    Self::RecipientNotFound => NotFound("recipient_not_found"),
    Self::Other(_) => Transient("internal_error"),
});

#[derive(Debug, Error)]
pub enum NotificationMarkIndividualReadError {
    #[error("The notification does not exist.")]
    NotFound,
    #[error("The notification is addressed to someone else.")]
    NotRecipient,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

error_code!(NotificationMarkIndividualReadError {
    Self::NotFound => NotFound("notification_not_found"),
    Self::NotRecipient => Authorization("not_recipient"),
    Self::Other(_) => Transient("internal_error"),
});

#[cfg(feature = "mock")]
impl MockNotificationFeatureService {
    pub fn with_list_for_employee(
        mut self,
        employee_id: AccountId,
        result: Result<Vec<EmployeeNotification>, NotificationEmployeeError>,
    ) -> Self {
        self.expect_list_for_employee()
            .once()
            .with(mockall::predicate::eq(employee_id))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_unread_count(
        mut self,
        employee_id: AccountId,
        result: Result<u64, NotificationEmployeeError>,
    ) -> Self {
        self.expect_unread_count()
            .once()
            .with(mockall::predicate::eq(employee_id))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
