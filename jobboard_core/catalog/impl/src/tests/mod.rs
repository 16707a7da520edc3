use jobboard_core_catalog_contracts::ownership::MockJobOwnershipService;
use jobboard_core_notification_contracts::notification::MockNotificationService;
use jobboard_persistence_contracts::{
    account::MockAccountRepository, catalog::MockCatalogRepository,
    saved::MockSavedJobRepository, MockDatabase, MockTransaction,
};
use jobboard_shared_contracts::{id::MockIdService, time::MockTimeService};

use crate::CatalogFeatureServiceImpl;

mod create_job;
mod list_jobs;
mod update_job;

type Sut = CatalogFeatureServiceImpl<
    MockDatabase,
    MockIdService,
    MockTimeService,
    MockJobOwnershipService<MockTransaction>,
    MockNotificationService<MockTransaction>,
    MockAccountRepository<MockTransaction>,
    MockCatalogRepository<MockTransaction>,
    MockSavedJobRepository<MockTransaction>,
>;
