use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use jobboard_models::notification::{BroadcastNotification, IndividualNotification};
use jobboard_persistence_contracts::notification::NotificationRepository;
use uuid::uuid;

use crate::{
    account::{BOB, CAROL, EVE},
    company::ACME,
};

pub static ALL_INDIVIDUAL_NOTIFICATIONS: LazyLock<Vec<&IndividualNotification>> =
    LazyLock::new(|| vec![&BOB_REJECTED]);

pub static ALL_BROADCAST_NOTIFICATIONS: LazyLock<Vec<&BroadcastNotification>> =
    LazyLock::new(|| vec![&ACME_APPLICATION_RECEIVED]);

pub static BOB_REJECTED: LazyLock<IndividualNotification> =
    LazyLock::new(|| IndividualNotification {
        id: uuid!("a0710000-0000-4000-8000-000000000001").into(),
        recipient_id: BOB.id,
        sender_id: EVE.id,
        text: "Your application for \"Product Designer\" was rejected: The position has been \
               filled."
            .try_into()
            .unwrap(),
        created_at: Utc.with_ymd_and_hms(2024, 2, 22, 15, 0, 0).unwrap(),
        read: false,
    });

/// Sent before Ivan joined Acme.
pub static ACME_APPLICATION_RECEIVED: LazyLock<BroadcastNotification> =
    LazyLock::new(|| BroadcastNotification {
        id: uuid!("b0ad0000-0000-4000-8000-000000000001").into(),
        company_id: ACME.id,
        sender_id: CAROL.id,
        text: "New application received for \"Senior Backend Developer\""
            .try_into()
            .unwrap(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    });

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: &impl NotificationRepository<Txn>,
) -> anyhow::Result<()> {
    for &notification in &*ALL_INDIVIDUAL_NOTIFICATIONS {
        repo.create_individual(txn, notification).await?;
    }
    for &notification in &*ALL_BROADCAST_NOTIFICATIONS {
        repo.create_broadcast(txn, notification).await?;
    }
    Ok(())
}
