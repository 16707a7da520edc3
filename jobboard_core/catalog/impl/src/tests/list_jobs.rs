use jobboard_core_catalog_contracts::CatalogFeatureService;
use jobboard_demo::{
    catalog::{catalog_entry, ACME_BACKEND, ACME_DESIGN},
    company::ACME,
};
use jobboard_models::{
    job::JobPredicate,
    pagination::{Page, PaginationSlice},
};
use jobboard_persistence_contracts::{catalog::MockCatalogRepository, MockDatabase};
use pretty_assertions::assert_eq;

use crate::{tests::Sut, CatalogFeatureServiceImpl};

#[tokio::test]
async fn ok() {
    // Arrange
    let predicate = JobPredicate::Company(ACME.id).and(JobPredicate::Active(true));
    let pagination = PaginationSlice {
        limit: 2.try_into().unwrap(),
        offset: 0,
    };
    let items = vec![catalog_entry(&ACME_DESIGN), catalog_entry(&ACME_BACKEND)];

    let db = MockDatabase::build(false);

    let catalog_repo = MockCatalogRepository::new()
        .with_count(predicate.clone(), 5)
        .with_list_entries(predicate.clone(), Some(pagination), items.clone());

    let sut = CatalogFeatureServiceImpl {
        db,
        catalog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_jobs(predicate, pagination).await;

    // Assert
    assert_eq!(result.unwrap(), Page { total: 5, items });
}
