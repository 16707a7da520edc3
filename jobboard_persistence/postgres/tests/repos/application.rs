use chrono::{TimeZone, Utc};
use jobboard_demo::{
    account::{ALICE, CAROL},
    application::{ALL_APPLICATIONS, BOB_ACME_DESIGN, CAROL_ACME_BACKEND},
    catalog::{ACME_BACKEND, GLOBEX_FRONTEND},
    UUID1, UUID2,
};
use jobboard_models::application::{
    ApplicationRequest, ApplicationResolution, ApplicationStatus,
};
use jobboard_persistence_contracts::{
    application::{ApplicationRepoError, ApplicationRepository},
    catalog::CatalogRepository,
    Database, Transaction,
};
use jobboard_persistence_postgres::{
    application::PostgresApplicationRepository, catalog::PostgresCatalogRepository,
};
use jobboard_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: PostgresApplicationRepository = PostgresApplicationRepository;

#[tokio::test]
async fn get() {
    let Some(db) = setup().await else {
        return;
    };
    let mut txn = db.begin_transaction().await.unwrap();

    for &request in &*ALL_APPLICATIONS {
        let result = REPO.get(&mut txn, request.id).await.unwrap().unwrap();
        assert_eq!(&result, request);
    }

    let result = REPO.get(&mut txn, UUID1.into()).await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn get_by_seeker_and_job() {
    let Some(db) = setup().await else {
        return;
    };
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .get_by_seeker_and_job(&mut txn, CAROL.id, ACME_BACKEND.id)
        .await
        .unwrap();
    assert_eq!(result.as_ref(), Some(&*CAROL_ACME_BACKEND));

    let result = REPO
        .get_by_seeker_and_job(&mut txn, ALICE.id, ACME_BACKEND.id)
        .await
        .unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn list_by_job() {
    let Some(db) = setup().await else {
        return;
    };
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list_by_job(&mut txn, ACME_BACKEND.id).await.unwrap();
    assert_eq!(result, [CAROL_ACME_BACKEND.clone()]);

    let result = REPO.list_by_job(&mut txn, GLOBEX_FRONTEND.id).await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn create_twice_conflicts() {
    let Some(db) = setup().await else {
        return;
    };

    let first = ApplicationRequest {
        id: UUID1.into(),
        seeker_id: ALICE.id,
        job_id: GLOBEX_FRONTEND.id,
        status: ApplicationStatus::Pending,
        cover_letter: None,
        submitted_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        response: None,
        responded_at: None,
    };
    let second = ApplicationRequest {
        id: UUID2.into(),
        ..first.clone()
    };

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &first).await.unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.create(&mut txn, &second).await;
    assert_matches!(result, Err(ApplicationRepoError::Conflict));
    txn.rollback().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.list_by_seeker(&mut txn, ALICE.id).await.unwrap();
    assert_eq!(result, [first]);
}

#[tokio::test]
async fn resolve_only_pending() {
    let Some(db) = setup().await else {
        return;
    };
    let responded_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let resolution = ApplicationResolution {
        status: ApplicationStatus::Rejected,
        response: "not a fit".try_into().unwrap(),
        responded_at,
    };

    let mut txn = db.begin_transaction().await.unwrap();
    assert!(REPO
        .resolve(&mut txn, CAROL_ACME_BACKEND.id, &resolution)
        .await
        .unwrap());
    assert!(!REPO
        .resolve(&mut txn, CAROL_ACME_BACKEND.id, &resolution)
        .await
        .unwrap());
    assert!(!REPO
        .resolve(&mut txn, BOB_ACME_DESIGN.id, &resolution)
        .await
        .unwrap());
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.get(&mut txn, CAROL_ACME_BACKEND.id).await.unwrap();
    assert_eq!(
        result.unwrap(),
        ApplicationRequest {
            status: ApplicationStatus::Rejected,
            response: Some(resolution.response),
            responded_at: Some(responded_at),
            ..CAROL_ACME_BACKEND.clone()
        }
    );

    let result = REPO.get(&mut txn, BOB_ACME_DESIGN.id).await.unwrap();
    assert_eq!(result.as_ref(), Some(&*BOB_ACME_DESIGN));
}

#[tokio::test]
async fn delete_job_cascades() {
    let Some(db) = setup().await else {
        return;
    };

    let mut txn = db.begin_transaction().await.unwrap();
    assert!(PostgresCatalogRepository
        .delete_job(&mut txn, ACME_BACKEND.id)
        .await
        .unwrap());
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.get(&mut txn, CAROL_ACME_BACKEND.id).await.unwrap();
    assert_eq!(result, None);
}
