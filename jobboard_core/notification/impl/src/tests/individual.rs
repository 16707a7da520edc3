use jobboard_core_notification_contracts::{
    NotificationFeatureService, NotificationListIndividualError,
    NotificationMarkIndividualReadError,
};
use jobboard_demo::{
    account::{BOB, CAROL},
    notification::BOB_REJECTED,
};
use jobboard_models::notification::IndividualNotification;
use jobboard_persistence_contracts::{
    account::MockAccountRepository, notification::MockNotificationRepository, MockDatabase,
};
use jobboard_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::Sut, NotificationFeatureServiceImpl};

#[tokio::test]
async fn list_ok() {
    // Arrange
    let db = MockDatabase::build(false);

    let account_repo = MockAccountRepository::new().with_get(BOB.id, Some(BOB.clone()));

    let notification_repo =
        MockNotificationRepository::new().with_list_individual(BOB.id, vec![BOB_REJECTED.clone()]);

    let sut = NotificationFeatureServiceImpl {
        db,
        account_repo,
        notification_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_individual(BOB.id).await;

    // Assert
    assert_eq!(result.unwrap(), [BOB_REJECTED.clone()]);
}

#[tokio::test]
async fn list_recipient_not_found() {
    // Arrange
    let db = MockDatabase::build(false);

    let account_repo = MockAccountRepository::new().with_get(BOB.id, None);

    let sut = NotificationFeatureServiceImpl {
        db,
        account_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_individual(BOB.id).await;

    // Assert
    assert_matches!(result, Err(NotificationListIndividualError::RecipientNotFound));
}

#[tokio::test]
async fn mark_read_ok() {
    // Arrange
    let db = MockDatabase::build(true);

    let notification_repo = MockNotificationRepository::new()
        .with_get_individual(BOB_REJECTED.id, Some(BOB_REJECTED.clone()))
        .with_mark_individual_read(BOB_REJECTED.id, true);

    let sut = NotificationFeatureServiceImpl {
        db,
        notification_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.mark_individual_read(BOB.id, BOB_REJECTED.id).await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn mark_read_already_read() {
    // Arrange
    let db = MockDatabase::build(true);

    let notification_repo = MockNotificationRepository::new().with_get_individual(
        BOB_REJECTED.id,
        Some(IndividualNotification {
            read: true,
            ..BOB_REJECTED.clone()
        }),
    );

    let sut = NotificationFeatureServiceImpl {
        db,
        notification_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.mark_individual_read(BOB.id, BOB_REJECTED.id).await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn mark_read_not_recipient() {
    // Arrange
    let db = MockDatabase::build(false);

    let notification_repo = MockNotificationRepository::new()
        .with_get_individual(BOB_REJECTED.id, Some(BOB_REJECTED.clone()));

    let sut = NotificationFeatureServiceImpl {
        db,
        notification_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.mark_individual_read(CAROL.id, BOB_REJECTED.id).await;

    // Assert
    assert_matches!(result, Err(NotificationMarkIndividualReadError::NotRecipient));
}

#[tokio::test]
async fn mark_read_not_found() {
    // Arrange
    let db = MockDatabase::build(false);

    let notification_repo =
        MockNotificationRepository::new().with_get_individual(BOB_REJECTED.id, None);

    let sut = NotificationFeatureServiceImpl {
        db,
        notification_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.mark_individual_read(BOB.id, BOB_REJECTED.id).await;

    // Assert
    assert_matches!(result, Err(NotificationMarkIndividualReadError::NotFound));
}
