use jobboard_core_catalog_contracts::{
    ownership::{JobOwnershipError, MockJobOwnershipService},
    CatalogFeatureService, CatalogUpdateJobError, JobUpdateCommand,
};
use jobboard_core_notification_contracts::notification::MockNotificationService;
use jobboard_demo::{
    account::{EVE, GRACE},
    catalog::{catalog_entry, ACME_BACKEND, BACKEND, FRONTEND},
    company::ACME,
    UUID1,
};
use jobboard_models::{
    job::{CatalogEntry, JobPosting, JobPostingPatch},
    notification::BroadcastNotification,
};
use jobboard_persistence_contracts::{catalog::MockCatalogRepository, MockDatabase};
use jobboard_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::Sut, CatalogFeatureServiceImpl};

#[tokio::test]
async fn ok() {
    // Arrange
    let title = "Staff Backend Developer".try_into().unwrap();
    let cmd = JobUpdateCommand {
        patch: JobPostingPatch::new()
            .update_title(title)
            .update_salary(ACME_BACKEND.salary),
        categories: Some(vec![FRONTEND.id, BACKEND.id]),
    };

    let expected = CatalogEntry {
        job: JobPosting {
            title: "Staff Backend Developer".try_into().unwrap(),
            ..ACME_BACKEND.clone()
        },
        categories: vec![BACKEND.clone(), FRONTEND.clone()],
        company_rating: ACME.rating,
    };

    let db = MockDatabase::build(true);

    let job_ownership = MockJobOwnershipService::new().with_authorize(
        EVE.id,
        ACME_BACKEND.id,
        Ok(catalog_entry(&ACME_BACKEND)),
    );

    let catalog_repo = MockCatalogRepository::new()
        .with_get_categories(
            vec![BACKEND.id, FRONTEND.id],
            vec![FRONTEND.clone(), BACKEND.clone()],
        )
        .with_update_job(
            ACME_BACKEND.id,
            JobPostingPatch::new().update_title("Staff Backend Developer".try_into().unwrap()),
            true,
        )
        .with_set_job_categories(ACME_BACKEND.id, vec![BACKEND.id, FRONTEND.id]);

    let notification = MockNotificationService::new().with_broadcast(BroadcastNotification {
        id: UUID1.into(),
        company_id: ACME.id,
        sender_id: EVE.id,
        text: "Job posting \"Staff Backend Developer\" was updated"
            .try_into()
            .unwrap(),
        created_at: ACME_BACKEND.posted_at,
    });

    let sut = CatalogFeatureServiceImpl {
        db,
        job_ownership,
        notification,
        catalog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.update_job(EVE.id, ACME_BACKEND.id, cmd).await;

    // Assert
    assert_eq!(result.unwrap(), expected);
}

#[tokio::test]
async fn unchanged() {
    // Arrange
    let cmd = JobUpdateCommand {
        patch: JobPostingPatch::new()
            .update_title(ACME_BACKEND.title.clone())
            .update_active(false),
        categories: Some(vec![BACKEND.id]),
    };

    let db = MockDatabase::build(true);

    let job_ownership = MockJobOwnershipService::new().with_authorize(
        EVE.id,
        ACME_BACKEND.id,
        Ok(catalog_entry(&ACME_BACKEND)),
    );

    let catalog_repo =
        MockCatalogRepository::new().with_get_categories(vec![BACKEND.id], vec![BACKEND.clone()]);

    let sut = CatalogFeatureServiceImpl {
        db,
        job_ownership,
        catalog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.update_job(EVE.id, ACME_BACKEND.id, cmd).await;

    // Assert
    assert_eq!(result.unwrap(), catalog_entry(&ACME_BACKEND));
}

#[tokio::test]
async fn not_job_owner() {
    // Arrange
    let db = MockDatabase::build(false);

    let job_ownership = MockJobOwnershipService::new().with_authorize(
        GRACE.id,
        ACME_BACKEND.id,
        Err(JobOwnershipError::NotJobOwner),
    );

    let sut = CatalogFeatureServiceImpl {
        db,
        job_ownership,
        ..Sut::default()
    };

    // Act
    let result = sut
        .update_job(GRACE.id, ACME_BACKEND.id, JobUpdateCommand::default())
        .await;

    // Assert
    assert_matches!(
        result,
        Err(CatalogUpdateJobError::Ownership(
            JobOwnershipError::NotJobOwner
        ))
    );
}

#[tokio::test]
async fn category_not_found() {
    // Arrange
    let cmd = JobUpdateCommand {
        patch: JobPostingPatch::new(),
        categories: Some(vec![FRONTEND.id]),
    };

    let db = MockDatabase::build(false);

    let job_ownership = MockJobOwnershipService::new().with_authorize(
        EVE.id,
        ACME_BACKEND.id,
        Ok(catalog_entry(&ACME_BACKEND)),
    );

    let catalog_repo = MockCatalogRepository::new().with_get_categories(vec![FRONTEND.id], vec![]);

    let sut = CatalogFeatureServiceImpl {
        db,
        job_ownership,
        catalog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.update_job(EVE.id, ACME_BACKEND.id, cmd).await;

    // Assert
    assert_matches!(result, Err(CatalogUpdateJobError::CategoryNotFound));
}
