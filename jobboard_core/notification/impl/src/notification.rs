use anyhow::Context;
use jobboard_core_notification_contracts::notification::NotificationService;
use jobboard_di::Build;
use jobboard_models::{
    account::AccountId,
    company::CompanyId,
    notification::{BroadcastNotification, IndividualNotification, NotificationText},
};
use jobboard_persistence_contracts::notification::NotificationRepository;
use jobboard_shared_contracts::{id::IdService, time::TimeService};
use jobboard_utils::trace_instrument;

#[derive(Debug, Clone, Default, Build)]
pub struct NotificationServiceImpl<Id, Time, NotificationRepo> {
    id: Id,
    time: Time,
    notification_repo: NotificationRepo,
}

impl<Txn, Id, Time, NotificationRepo> NotificationService<Txn>
    for NotificationServiceImpl<Id, Time, NotificationRepo>
where
    Txn: Send + Sync + 'static,
    Id: IdService,
    Time: TimeService,
    NotificationRepo: NotificationRepository<Txn>,
{
    #[trace_instrument(skip(self, txn))]
    async fn send_individual(
        &self,
        txn: &mut Txn,
        recipient_id: AccountId,
        sender_id: AccountId,
        text: NotificationText,
    ) -> anyhow::Result<IndividualNotification> {
        let notification = IndividualNotification {
            id: self.id.generate(),
            recipient_id,
            sender_id,
            text,
            created_at: self.time.now(),
            read: false,
        };

        self.notification_repo
            .create_individual(txn, &notification)
            .await
            .context("Failed to create notification in database")?;

        Ok(notification)
    }

    #[trace_instrument(skip(self, txn))]
    async fn broadcast(
        &self,
        txn: &mut Txn,
        company_id: CompanyId,
        sender_id: AccountId,
        text: NotificationText,
    ) -> anyhow::Result<BroadcastNotification> {
        let notification = BroadcastNotification {
            id: self.id.generate(),
            company_id,
            sender_id,
            text,
            created_at: self.time.now(),
        };

        self.notification_repo
            .create_broadcast(txn, &notification)
            .await
            .context("Failed to create broadcast in database")?;

        Ok(notification)
    }
}
