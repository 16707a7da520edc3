use chrono::{TimeZone, Utc};
use jobboard_demo::{
    account::{ALICE, BOB},
    application::ALICE_SAVED_GLOBEX_FRONTEND,
    catalog::{ACCOUNT_EXECUTIVE, ACME_DESIGN, BACKEND, GLOBEX_FRONTEND, UI_DESIGN},
};
use jobboard_models::application::SavedJob;
use jobboard_persistence_contracts::{
    catalog::CatalogRepository, preference::PreferenceRepository, saved::SavedJobRepository,
    Database, Transaction,
};
use jobboard_persistence_postgres::{
    catalog::PostgresCatalogRepository, preference::PostgresPreferenceRepository,
    saved::PostgresSavedJobRepository,
};
use pretty_assertions::assert_eq;

use crate::common::setup;

#[tokio::test]
async fn replace_preferences() {
    let Some(db) = setup().await else {
        return;
    };
    let repo = PostgresPreferenceRepository;

    let mut txn = db.begin_transaction().await.unwrap();
    assert_eq!(repo.list(&mut txn, ALICE.id).await.unwrap(), [BACKEND.clone()]);
    assert!(repo.list(&mut txn, BOB.id).await.unwrap().is_empty());

    repo.replace(&mut txn, ALICE.id, vec![UI_DESIGN.id, ACCOUNT_EXECUTIVE.id])
        .await
        .unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    assert_eq!(
        repo.list(&mut txn, ALICE.id).await.unwrap(),
        [ACCOUNT_EXECUTIVE.clone(), UI_DESIGN.clone()]
    );

    repo.replace(&mut txn, ALICE.id, vec![]).await.unwrap();
    assert!(repo.list(&mut txn, ALICE.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn saved_jobs() {
    let Some(db) = setup().await else {
        return;
    };
    let repo = PostgresSavedJobRepository;

    let saved = SavedJob {
        seeker_id: ALICE.id,
        job_id: ACME_DESIGN.id,
        saved_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    };

    let mut txn = db.begin_transaction().await.unwrap();
    assert!(repo.save(&mut txn, &saved).await.unwrap());
    assert!(!repo.save(&mut txn, &saved).await.unwrap());
    assert_eq!(
        repo.list(&mut txn, ALICE.id).await.unwrap(),
        [saved.clone(), ALICE_SAVED_GLOBEX_FRONTEND.clone()]
    );

    assert!(repo
        .delete(&mut txn, ALICE.id, GLOBEX_FRONTEND.id)
        .await
        .unwrap());
    assert!(!repo
        .delete(&mut txn, ALICE.id, GLOBEX_FRONTEND.id)
        .await
        .unwrap());
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    assert!(PostgresCatalogRepository
        .delete_job(&mut txn, ACME_DESIGN.id)
        .await
        .unwrap());
    assert!(repo.list(&mut txn, ALICE.id).await.unwrap().is_empty());
}
