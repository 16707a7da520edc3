use std::future::Future;

use jobboard_models::{
    account::AccountId,
    company::CompanyId,
    notification::{BroadcastNotification, IndividualNotification, NotificationText},
};

/// Creates notifications inside the caller's transaction, so they are only
/// persisted together with the change that caused them.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationService<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Create an unread notification for a single account.
    fn send_individual(
        &self,
        txn: &mut Txn,
        recipient_id: AccountId,
        sender_id: AccountId,
        text: NotificationText,
    ) -> impl Future<Output = anyhow::Result<IndividualNotification>> + Send;

    /// Create a notification visible to all employees of a company.
    fn broadcast(
        &self,
        txn: &mut Txn,
        company_id: CompanyId,
        sender_id: AccountId,
        text: NotificationText,
    ) -> impl Future<Output = anyhow::Result<BroadcastNotification>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockNotificationService<Txn> {
    pub fn with_send_individual(mut self, result: IndividualNotification) -> Self {
        self.expect_send_individual()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(result.recipient_id),
                mockall::predicate::eq(result.sender_id),
                mockall::predicate::eq(result.text.clone()),
            )
            .return_once(|_, _, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_broadcast(mut self, result: BroadcastNotification) -> Self {
        self.expect_broadcast()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(result.company_id),
                mockall::predicate::eq(result.sender_id),
                mockall::predicate::eq(result.text.clone()),
            )
            .return_once(|_, _, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_individual_error(mut self, error: anyhow::Error) -> Self {
        self.expect_send_individual()
            .once()
            .return_once(|_, _, _, _| Box::pin(std::future::ready(Err(error))));
        self
    }

    pub fn with_broadcast_error(mut self, error: anyhow::Error) -> Self {
        self.expect_broadcast()
            .once()
            .return_once(|_, _, _, _| Box::pin(std::future::ready(Err(error))));
        self
    }
}
