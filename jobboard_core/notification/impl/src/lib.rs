use anyhow::Context;
use jobboard_core_notification_contracts::{
    notification::NotificationService, NotificationBroadcastError, NotificationEmployeeError,
    NotificationFeatureService, NotificationListIndividualError,
    NotificationMarkIndividualReadError, NotificationMarkReadError,
    NotificationSendIndividualError,
};
use jobboard_di::Build;
use jobboard_models::{
    account::AccountId,
    company::CompanyId,
    notification::{
        BroadcastNotification, BroadcastNotificationId, EmployeeNotification,
        IndividualNotification, IndividualNotificationId, NotificationText,
    },
};
use jobboard_persistence_contracts::{
    account::AccountRepository, company::CompanyRepository,
    notification::NotificationRepository, Database, TransactionExt,
};
use jobboard_utils::trace_instrument;

pub mod notification;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct NotificationFeatureServiceImpl<
    Db,
    Notification,
    AccountRepo,
    CompanyRepo,
    NotificationRepo,
> {
    db: Db,
    notification: Notification,
    account_repo: AccountRepo,
    company_repo: CompanyRepo,
    notification_repo: NotificationRepo,
}

impl<Db, Notification, AccountRepo, CompanyRepo, NotificationRepo> NotificationFeatureService
    for NotificationFeatureServiceImpl<Db, Notification, AccountRepo, CompanyRepo, NotificationRepo>
where
    Db: Database,
    Notification: NotificationService<Db::Transaction>,
    AccountRepo: AccountRepository<Db::Transaction>,
    CompanyRepo: CompanyRepository<Db::Transaction>,
    NotificationRepo: NotificationRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn send_individual(
        &self,
        recipient_id: AccountId,
        sender_id: AccountId,
        text: NotificationText,
    ) -> Result<IndividualNotification, NotificationSendIndividualError> {
        let mut txn = self.db.begin_transaction().await?;

        let result = async {
            self.account_repo
                .get(&mut txn, recipient_id)
                .await
                .context("Failed to get recipient from database")?
                .ok_or(NotificationSendIndividualError::RecipientNotFound)?;

            self.account_repo
                .get(&mut txn, sender_id)
                .await
                .context("Failed to get sender from database")?
                .ok_or(NotificationSendIndividualError::SenderNotFound)?;

            let notification = self
                .notification
                .send_individual(&mut txn, recipient_id, sender_id, text)
                .await?;

            Ok::<_, NotificationSendIndividualError>(notification)
        }
        .await;

        txn.finish(result).await
    }

    #[trace_instrument(skip(self))]
    async fn broadcast(
        &self,
        company_id: CompanyId,
        sender_id: AccountId,
        text: NotificationText,
    ) -> Result<BroadcastNotification, NotificationBroadcastError> {
        let mut txn = self.db.begin_transaction().await?;

        let result = async {
            self.company_repo
                .get(&mut txn, company_id)
                .await
                .context("Failed to get company from database")?
                .ok_or(NotificationBroadcastError::CompanyNotFound)?;

            self.account_repo
                .get(&mut txn, sender_id)
                .await
                .context("Failed to get sender from database")?
                .ok_or(NotificationBroadcastError::SenderNotFound)?;

            let notification = self
                .notification
                .broadcast(&mut txn, company_id, sender_id, text)
                .await?;

            Ok::<_, NotificationBroadcastError>(notification)
        }
        .await;

        txn.finish(result).await
    }

    #[trace_instrument(skip(self))]
    async fn list_for_employee(
        &self,
        employee_id: AccountId,
    ) -> Result<Vec<EmployeeNotification>, NotificationEmployeeError> {
        let mut txn = self.db.begin_transaction().await?;

        let company_id = self.company_of(&mut txn, employee_id).await?;

        self.notification_repo
            .list_for_employee(&mut txn, employee_id, company_id)
            .await
            .context("Failed to get notifications from database")
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn mark_read(
        &self,
        employee_id: AccountId,
        notification_id: BroadcastNotificationId,
    ) -> Result<(), NotificationMarkReadError> {
        let mut txn = self.db.begin_transaction().await?;

        let result = async {
            let company_id = self
                .company_of(&mut txn, employee_id)
                .await
                .map_err(|err| match err {
                    NotificationEmployeeError::EmployeeNotFound => {
                        NotificationMarkReadError::EmployeeNotFound
                    }
                    NotificationEmployeeError::Other(err) => err.into(),
                })?;

            // Broadcasts of other companies are not visible to the employee.
            self.notification_repo
                .get_broadcast(&mut txn, notification_id)
                .await
                .context("Failed to get notification from database")?
                .filter(|notification| notification.company_id == company_id)
                .ok_or(NotificationMarkReadError::NotFound)?;

            self.notification_repo
                .mark_read(&mut txn, employee_id, notification_id)
                .await
                .context("Failed to mark notification as read")?;

            Ok::<_, NotificationMarkReadError>(())
        }
        .await;

        txn.finish(result).await
    }

    #[trace_instrument(skip(self))]
    async fn mark_all_read(&self, employee_id: AccountId) -> Result<(), NotificationEmployeeError> {
        let mut txn = self.db.begin_transaction().await?;

        let result = async {
            let company_id = self.company_of(&mut txn, employee_id).await?;

            self.notification_repo
                .mark_all_read(&mut txn, employee_id, company_id)
                .await
                .context("Failed to mark notifications as read")?;

            Ok::<_, NotificationEmployeeError>(())
        }
        .await;

        txn.finish(result).await
    }

    #[trace_instrument(skip(self))]
    async fn unread_count(&self, employee_id: AccountId) -> Result<u64, NotificationEmployeeError> {
        let mut txn = self.db.begin_transaction().await?;

        let company_id = self.company_of(&mut txn, employee_id).await?;

        self.notification_repo
            .count_unread(&mut txn, employee_id, company_id)
            .await
            .context("Failed to count unread notifications")
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn list_individual(
        &self,
        recipient_id: AccountId,
    ) -> Result<Vec<IndividualNotification>, NotificationListIndividualError> {
        let mut txn = self.db.begin_transaction().await?;

        self.account_repo
            .get(&mut txn, recipient_id)
            .await
            .context("Failed to get recipient from database")?
            .ok_or(NotificationListIndividualError::RecipientNotFound)?;

        self.notification_repo
            .list_individual(&mut txn, recipient_id)
            .await
            .context("Failed to get notifications from database")
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn mark_individual_read(
        &self,
        recipient_id: AccountId,
        notification_id: IndividualNotificationId,
    ) -> Result<(), NotificationMarkIndividualReadError> {
        let mut txn = self.db.begin_transaction().await?;

        let result = async {
            let notification = self
                .notification_repo
                .get_individual(&mut txn, notification_id)
                .await
                .context("Failed to get notification from database")?
                .ok_or(NotificationMarkIndividualReadError::NotFound)?;

            if notification.recipient_id != recipient_id {
                return Err(NotificationMarkIndividualReadError::NotRecipient);
            }

            if !notification.read {
                self.notification_repo
                    .mark_individual_read(&mut txn, notification_id)
                    .await
                    .context("Failed to mark notification as read")?;
            }

            Ok::<_, NotificationMarkIndividualReadError>(())
        }
        .await;

        txn.finish(result).await
    }
}

impl<Db, Notification, AccountRepo, CompanyRepo, NotificationRepo>
    NotificationFeatureServiceImpl<Db, Notification, AccountRepo, CompanyRepo, NotificationRepo>
where
    Db: Database,
    AccountRepo: AccountRepository<Db::Transaction>,
{
    /// Resolves the company the employee currently belongs to.
    async fn company_of(
        &self,
        txn: &mut Db::Transaction,
        employee_id: AccountId,
    ) -> Result<CompanyId, NotificationEmployeeError> {
        self.account_repo
            .get_employee(txn, employee_id)
            .await
            .context("Failed to get employee from database")?
            .map(|employee| employee.company_id)
            .ok_or(NotificationEmployeeError::EmployeeNotFound)
    }
}
