use chrono::{TimeZone, Utc};
use jobboard_demo::{
    account::{ALL_EMPLOYEES, BOB, EVE, EVE_AT_ACME, FRANK, IVAN, IVAN_AT_ACME},
    company::{ACME, GLOBEX},
    notification::{ACME_APPLICATION_RECEIVED, BOB_REJECTED},
    UUID1,
};
use jobboard_models::{
    account::Employee,
    notification::{BroadcastNotification, EmployeeNotification},
};
use jobboard_persistence_contracts::{
    account::AccountRepository, notification::NotificationRepository, Database, Transaction,
};
use jobboard_persistence_postgres::{
    account::PostgresAccountRepository, notification::PostgresNotificationRepository,
};
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: PostgresNotificationRepository = PostgresNotificationRepository;

#[tokio::test]
async fn individual() {
    let Some(db) = setup().await else {
        return;
    };

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.list_individual(&mut txn, BOB.id).await.unwrap();
    assert_eq!(result, [BOB_REJECTED.clone()]);

    assert!(REPO
        .mark_individual_read(&mut txn, BOB_REJECTED.id)
        .await
        .unwrap());
    assert!(!REPO
        .mark_individual_read(&mut txn, UUID1.into())
        .await
        .unwrap());
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO
        .get_individual(&mut txn, BOB_REJECTED.id)
        .await
        .unwrap()
        .unwrap();
    assert!(result.read);
}

#[tokio::test]
async fn broadcast_unread_by_default() {
    let Some(db) = setup().await else {
        return;
    };
    let mut txn = db.begin_transaction().await.unwrap();

    // Ivan joined Acme after the broadcast was sent.
    assert!(IVAN_AT_ACME.joined_at > ACME_APPLICATION_RECEIVED.created_at);

    let result = REPO
        .list_for_employee(&mut txn, IVAN.id, ACME.id)
        .await
        .unwrap();
    assert_eq!(
        result,
        [EmployeeNotification {
            notification: ACME_APPLICATION_RECEIVED.clone(),
            is_read: false,
        }]
    );

    let result = REPO.count_unread(&mut txn, IVAN.id, ACME.id).await.unwrap();
    assert_eq!(result, 1);
}

#[tokio::test]
async fn unread_count_per_employee() {
    let Some(db) = setup().await else {
        return;
    };
    let acme_employees = ALL_EMPLOYEES
        .iter()
        .filter(|e| e.company_id == ACME.id)
        .collect::<Vec<_>>();
    assert_eq!(acme_employees.len(), 3);

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.mark_read(&mut txn, EVE.id, ACME_APPLICATION_RECEIVED.id)
        .await
        .unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    for employee in acme_employees {
        let expected = if employee.account_id == EVE.id { 0 } else { 1 };
        let result = REPO
            .count_unread(&mut txn, employee.account_id, ACME.id)
            .await
            .unwrap();
        assert_eq!(result, expected);
    }
}

#[tokio::test]
async fn mark_read_idempotent() {
    let Some(db) = setup().await else {
        return;
    };

    let second = BroadcastNotification {
        id: UUID1.into(),
        text: "Job posting \"Product Designer\" was updated"
            .try_into()
            .unwrap(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(),
        ..ACME_APPLICATION_RECEIVED.clone()
    };

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create_broadcast(&mut txn, &second).await.unwrap();
    REPO.mark_read(&mut txn, FRANK.id, second.id).await.unwrap();
    REPO.mark_read(&mut txn, FRANK.id, second.id).await.unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    assert_eq!(
        REPO.count_unread(&mut txn, FRANK.id, ACME.id).await.unwrap(),
        1
    );

    REPO.mark_all_read(&mut txn, FRANK.id, ACME.id).await.unwrap();
    REPO.mark_all_read(&mut txn, FRANK.id, ACME.id).await.unwrap();
    assert_eq!(
        REPO.count_unread(&mut txn, FRANK.id, ACME.id).await.unwrap(),
        0
    );

    let result = REPO
        .list_for_employee(&mut txn, FRANK.id, ACME.id)
        .await
        .unwrap();
    assert_eq!(
        result,
        [
            EmployeeNotification {
                notification: second,
                is_read: true,
            },
            EmployeeNotification {
                notification: ACME_APPLICATION_RECEIVED.clone(),
                is_read: true,
            },
        ]
    );
}

#[tokio::test]
async fn markers_of_previous_company_ignored() {
    let Some(db) = setup().await else {
        return;
    };

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.mark_read(&mut txn, EVE.id, ACME_APPLICATION_RECEIVED.id)
        .await
        .unwrap();
    PostgresAccountRepository
        .save_employee(
            &mut txn,
            &Employee {
                company_id: GLOBEX.id,
                ..EVE_AT_ACME.clone()
            },
        )
        .await
        .unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.count_unread(&mut txn, EVE.id, GLOBEX.id).await.unwrap();
    assert_eq!(result, 0);
    let result = REPO
        .list_for_employee(&mut txn, EVE.id, GLOBEX.id)
        .await
        .unwrap();
    assert!(result.is_empty());
}
