use chrono::{TimeZone, Utc};
use jobboard_core_catalog_contracts::{
    CatalogCreateJobError, CatalogFeatureService, JobCreateCommand,
};
use jobboard_core_notification_contracts::notification::MockNotificationService;
use jobboard_demo::{
    account::{EVE, EVE_AT_ACME, HEIDI},
    catalog::{BACKEND, UI_DESIGN},
    company::ACME,
    UUID1, UUID2,
};
use jobboard_models::{
    job::{CatalogEntry, JobPosting},
    notification::BroadcastNotification,
};
use jobboard_persistence_contracts::{
    account::MockAccountRepository, catalog::MockCatalogRepository, MockDatabase,
};
use jobboard_shared_contracts::{id::MockIdService, time::MockTimeService};
use jobboard_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::Sut, CatalogFeatureServiceImpl};

fn command() -> JobCreateCommand {
    JobCreateCommand {
        title: "Site Reliability Engineer".try_into().unwrap(),
        description: "Keep the lights on.".try_into().unwrap(),
        salary: Some(90_000),
        quantity: 2.try_into().unwrap(),
        closing_at: None,
        categories: vec![BACKEND.id, BACKEND.id],
    }
}

#[tokio::test]
async fn ok() {
    // Arrange
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
    let cmd = command();

    let job = JobPosting {
        id: UUID1.into(),
        company_id: ACME.id,
        title: cmd.title.clone(),
        description: cmd.description.clone(),
        salary: cmd.salary,
        quantity: cmd.quantity,
        active: true,
        closing_at: None,
        posted_at: now,
    };
    let expected = CatalogEntry {
        job: job.clone(),
        categories: vec![BACKEND.clone()],
        company_rating: ACME.rating,
    };

    let db = MockDatabase::build(true);

    let id = MockIdService::new().with_generate(job.id);
    let time = MockTimeService::new().with_now(now);

    let account_repo =
        MockAccountRepository::new().with_get_employee(EVE.id, Some(EVE_AT_ACME.clone()));

    let catalog_repo = MockCatalogRepository::new()
        .with_get_categories(vec![BACKEND.id], vec![BACKEND.clone()])
        .with_create_job(job.clone())
        .with_set_job_categories(job.id, vec![BACKEND.id])
        .with_get_entry(job.id, Some(expected.clone()));

    let notification = MockNotificationService::new().with_broadcast(BroadcastNotification {
        id: UUID2.into(),
        company_id: ACME.id,
        sender_id: EVE.id,
        text: "New job posting \"Site Reliability Engineer\" was created"
            .try_into()
            .unwrap(),
        created_at: now,
    });

    let sut = CatalogFeatureServiceImpl {
        db,
        id,
        time,
        notification,
        account_repo,
        catalog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.create_job(EVE.id, cmd).await;

    // Assert
    assert_eq!(result.unwrap(), expected);
}

#[tokio::test]
async fn not_an_employee() {
    // Arrange
    let db = MockDatabase::build(false);

    let account_repo = MockAccountRepository::new().with_get_employee(HEIDI.id, None);

    let sut = CatalogFeatureServiceImpl {
        db,
        account_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.create_job(HEIDI.id, command()).await;

    // Assert
    assert_matches!(result, Err(CatalogCreateJobError::NotAnEmployee));
}

#[tokio::test]
async fn category_not_found() {
    // Arrange
    let cmd = JobCreateCommand {
        categories: vec![UI_DESIGN.id, BACKEND.id],
        ..command()
    };

    let db = MockDatabase::build(false);

    let account_repo =
        MockAccountRepository::new().with_get_employee(EVE.id, Some(EVE_AT_ACME.clone()));

    let catalog_repo = MockCatalogRepository::new()
        .with_get_categories(vec![BACKEND.id, UI_DESIGN.id], vec![BACKEND.clone()]);

    let sut = CatalogFeatureServiceImpl {
        db,
        account_repo,
        catalog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.create_job(EVE.id, cmd).await;

    // Assert
    assert_matches!(result, Err(CatalogCreateJobError::CategoryNotFound));
}

#[tokio::test]
async fn broadcast_fails_rolls_back() {
    // Arrange
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
    let cmd = command();

    let job = JobPosting {
        id: UUID1.into(),
        company_id: ACME.id,
        title: cmd.title.clone(),
        description: cmd.description.clone(),
        salary: cmd.salary,
        quantity: cmd.quantity,
        active: true,
        closing_at: None,
        posted_at: now,
    };

    let db = MockDatabase::build(false);

    let id = MockIdService::new().with_generate(job.id);
    let time = MockTimeService::new().with_now(now);

    let account_repo =
        MockAccountRepository::new().with_get_employee(EVE.id, Some(EVE_AT_ACME.clone()));

    let catalog_repo = MockCatalogRepository::new()
        .with_get_categories(vec![BACKEND.id], vec![BACKEND.clone()])
        .with_create_job(job.clone())
        .with_set_job_categories(job.id, vec![BACKEND.id]);

    let notification = MockNotificationService::new()
        .with_broadcast_error(anyhow::anyhow!("Failed to create broadcast in database"));

    let sut = CatalogFeatureServiceImpl {
        db,
        id,
        time,
        notification,
        account_repo,
        catalog_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.create_job(EVE.id, cmd).await;

    // Assert
    assert_matches!(result, Err(CatalogCreateJobError::Other(_)));
}
