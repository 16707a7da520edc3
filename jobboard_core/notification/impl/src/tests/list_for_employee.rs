use jobboard_core_notification_contracts::{NotificationEmployeeError, NotificationFeatureService};
use jobboard_demo::{
    account::{HEIDI, IVAN, IVAN_AT_ACME},
    company::ACME,
    notification::ACME_APPLICATION_RECEIVED,
};
use jobboard_models::notification::EmployeeNotification;
use jobboard_persistence_contracts::{
    account::MockAccountRepository, notification::MockNotificationRepository, MockDatabase,
};
use jobboard_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::Sut, NotificationFeatureServiceImpl};

#[tokio::test]
async fn ok() {
    // Arrange
    let expected = vec![EmployeeNotification {
        notification: ACME_APPLICATION_RECEIVED.clone(),
        is_read: false,
    }];

    let db = MockDatabase::build(false);

    let account_repo =
        MockAccountRepository::new().with_get_employee(IVAN.id, Some(IVAN_AT_ACME.clone()));

    let notification_repo =
        MockNotificationRepository::new().with_list_for_employee(IVAN.id, ACME.id, expected.clone());

    let sut = NotificationFeatureServiceImpl {
        db,
        account_repo,
        notification_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_for_employee(IVAN.id).await;

    // Assert
    assert_eq!(result.unwrap(), expected);
}

#[tokio::test]
async fn employee_not_found() {
    // Arrange
    let db = MockDatabase::build(false);

    let account_repo = MockAccountRepository::new().with_get_employee(HEIDI.id, None);

    let sut = NotificationFeatureServiceImpl {
        db,
        account_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_for_employee(HEIDI.id).await;

    // Assert
    assert_matches!(result, Err(NotificationEmployeeError::EmployeeNotFound));
}
