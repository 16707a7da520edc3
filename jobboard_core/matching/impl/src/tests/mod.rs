use jobboard_persistence_contracts::{
    account::MockAccountRepository, catalog::MockCatalogRepository,
    preference::MockPreferenceRepository, MockDatabase, MockTransaction,
};
use jobboard_shared_contracts::time::MockTimeService;

use crate::MatchingFeatureServiceImpl;

mod preferences;

type Sut = MatchingFeatureServiceImpl<
    MockDatabase,
    MockTimeService,
    MockAccountRepository<MockTransaction>,
    MockCatalogRepository<MockTransaction>,
    MockPreferenceRepository<MockTransaction>,
>;
