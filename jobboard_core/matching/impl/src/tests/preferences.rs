use jobboard_core_matching_contracts::{
    MatchingFeatureService, MatchingGetPreferencesError, MatchingSetPreferencesError,
};
use jobboard_demo::{
    account::{ALICE, EVE},
    catalog::{BACKEND, UI_DESIGN},
};
use jobboard_persistence_contracts::{
    account::MockAccountRepository, catalog::MockCatalogRepository,
    preference::MockPreferenceRepository, MockDatabase,
};
use jobboard_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::Sut, MatchingFeatureServiceImpl};

#[tokio::test]
async fn get_ok() {
    // Arrange
    let db = MockDatabase::build(false);

    let account_repo = MockAccountRepository::new().with_get(ALICE.id, Some(ALICE.clone()));

    let preference_repo =
        MockPreferenceRepository::new().with_list(ALICE.id, vec![BACKEND.clone()]);

    let sut = MatchingFeatureServiceImpl {
        db,
        account_repo,
        preference_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.get_preferences(ALICE.id).await;

    // Assert
    assert_eq!(result.unwrap(), [BACKEND.clone()]);
}

#[tokio::test]
async fn get_seeker_not_found() {
    // Arrange
    let db = MockDatabase::build(false);

    let account_repo = MockAccountRepository::new().with_get(EVE.id, Some(EVE.clone()));

    let sut = MatchingFeatureServiceImpl {
        db,
        account_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.get_preferences(EVE.id).await;

    // Assert
    assert_matches!(result, Err(MatchingGetPreferencesError::SeekerNotFound));
}

#[tokio::test]
async fn set_ok() {
    // Arrange
    let db = MockDatabase::build(true);

    let account_repo = MockAccountRepository::new().with_get(ALICE.id, Some(ALICE.clone()));

    let catalog_repo = MockCatalogRepository::new().with_get_categories(
        vec![BACKEND.id, UI_DESIGN.id],
        vec![UI_DESIGN.clone(), BACKEND.clone()],
    );

    let preference_repo =
        MockPreferenceRepository::new().with_replace(ALICE.id, vec![BACKEND.id, UI_DESIGN.id]);

    let sut = MatchingFeatureServiceImpl {
        db,
        account_repo,
        catalog_repo,
        preference_repo,
        ..Sut::default()
    };

    // Act
    let result = sut
        .set_preferences(ALICE.id, vec![UI_DESIGN.id, BACKEND.id, UI_DESIGN.id])
        .await;

    // Assert
    assert_eq!(result.unwrap(), [BACKEND.clone(), UI_DESIGN.clone()]);
}

#[tokio::test]
async fn set_empty() {
    // Arrange
    let db = MockDatabase::build(true);

    let account_repo = MockAccountRepository::new().with_get(ALICE.id, Some(ALICE.clone()));

    let preference_repo = MockPreferenceRepository::new().with_replace(ALICE.id, vec![]);

    let sut = MatchingFeatureServiceImpl {
        db,
        account_repo,
        preference_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.set_preferences(ALICE.id, vec![]).await;

    // Assert
    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn set_category_not_found() {
    // Arrange
    let db = MockDatabase::build(false);

    let account_repo = MockAccountRepository::new().with_get(ALICE.id, Some(ALICE.clone()));

    let catalog_repo = MockCatalogRepository::new()
        .with_get_categories(vec![BACKEND.id, UI_DESIGN.id], vec![BACKEND.clone()]);

    let sut = MatchingFeatureServiceImpl {
        db,
        account_repo,
        catalog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut
        .set_preferences(ALICE.id, vec![BACKEND.id, UI_DESIGN.id])
        .await;

    // Assert
    assert_matches!(result, Err(MatchingSetPreferencesError::CategoryNotFound));
}

#[tokio::test]
async fn set_seeker_not_found() {
    // Arrange
    let db = MockDatabase::build(false);

    let account_repo = MockAccountRepository::new().with_get(ALICE.id, None);

    let sut = MatchingFeatureServiceImpl {
        db,
        account_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.set_preferences(ALICE.id, vec![BACKEND.id]).await;

    // Assert
    assert_matches!(result, Err(MatchingSetPreferencesError::SeekerNotFound));
}
