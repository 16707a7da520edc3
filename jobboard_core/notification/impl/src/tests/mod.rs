use jobboard_core_notification_contracts::notification::MockNotificationService;
use jobboard_persistence_contracts::{
    account::MockAccountRepository, company::MockCompanyRepository,
    notification::MockNotificationRepository, MockDatabase, MockTransaction,
};

use crate::NotificationFeatureServiceImpl;

mod individual;
mod list_for_employee;

type Sut = NotificationFeatureServiceImpl<
    MockDatabase,
    MockNotificationService<MockTransaction>,
    MockAccountRepository<MockTransaction>,
    MockCompanyRepository<MockTransaction>,
    MockNotificationRepository<MockTransaction>,
>;
