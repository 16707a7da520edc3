use jobboard_core_catalog_contracts::ownership::MockJobOwnershipService;
use jobboard_core_notification_contracts::notification::MockNotificationService;
use jobboard_persistence_contracts::{
    account::MockAccountRepository, application::MockApplicationRepository,
    catalog::MockCatalogRepository, MockDatabase, MockTransaction,
};
use jobboard_shared_contracts::{id::MockIdService, time::MockTimeService};

use crate::ApplicationFeatureServiceImpl;


type Sut = ApplicationFeatureServiceImpl<
    MockDatabase,
    MockIdService,
    MockTimeService,
    MockJobOwnershipService<MockTransaction>,
    MockNotificationService<MockTransaction>,
    MockAccountRepository<MockTransaction>,
    MockCatalogRepository<MockTransaction>,
    MockApplicationRepository<MockTransaction>,
>;
