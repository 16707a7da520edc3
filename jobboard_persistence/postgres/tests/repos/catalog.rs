use chrono::{TimeZone, Utc};
use jobboard_demo::{
    account::CAROL,
    catalog::{
        catalog_entry, ACME_ARCHIVED, ACME_BACKEND, ACME_DESIGN, ALL_CATEGORIES, ALL_JOBS,
        BACKEND, ENGINEERING, FRONTEND, GLOBEX_FRONTEND, INITECH_SALES, UI_DESIGN,
    },
    company::ACME,
    UUID1,
};
use jobboard_models::{
    job::{CatalogEntry, JobPosting, JobPostingPatch, JobPredicate},
    pagination::PaginationSlice,
};
use jobboard_persistence_contracts::{catalog::CatalogRepository, Database, Transaction};
use jobboard_persistence_postgres::catalog::PostgresCatalogRepository;
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: PostgresCatalogRepository = PostgresCatalogRepository;

fn entries(jobs: &[&JobPosting]) -> Vec<CatalogEntry> {
    jobs.iter().map(|&job| catalog_entry(job)).collect()
}

#[tokio::test]
async fn get_entry() {
    let Some(db) = setup().await else {
        return;
    };
    let mut txn = db.begin_transaction().await.unwrap();

    for &job in &*ALL_JOBS {
        let result = REPO.get_entry(&mut txn, job.id).await.unwrap();
        assert_eq!(result, Some(catalog_entry(job)));
    }

    let result = REPO.get_entry(&mut txn, UUID1.into()).await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn get_categories() {
    let Some(db) = setup().await else {
        return;
    };
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list_categories(&mut txn).await.unwrap();
    assert_eq!(result.len(), ALL_CATEGORIES.len());

    let result = REPO
        .get_categories(&mut txn, vec![UI_DESIGN.id, BACKEND.id, UUID1.into()])
        .await
        .unwrap();
    assert_eq!(result, [BACKEND.clone(), UI_DESIGN.clone()]);
}

#[tokio::test]
async fn list_open_not_applied() {
    let Some(db) = setup().await else {
        return;
    };
    let mut txn = db.begin_transaction().await.unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let predicate = JobPredicate::OpenAt(now).and(JobPredicate::NotAppliedBy(CAROL.id));

    let result = REPO.list_entries(&mut txn, &predicate, None).await.unwrap();
    assert_eq!(
        result,
        entries(&[&INITECH_SALES, &ACME_DESIGN, &GLOBEX_FRONTEND])
    );

    let result = REPO.count(&mut txn, &predicate).await.unwrap();
    assert_eq!(result, 3);
}

#[tokio::test]
async fn list_by_category_or_field() {
    let Some(db) = setup().await else {
        return;
    };
    let mut txn = db.begin_transaction().await.unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let predicate = JobPredicate::OpenAt(now).and(
        JobPredicate::HasAnyCategory(vec![UI_DESIGN.id])
            .or(JobPredicate::InAnyField(vec![ENGINEERING.id])),
    );

    let result = REPO.list_entries(&mut txn, &predicate, None).await.unwrap();
    assert_eq!(
        result,
        entries(&[&ACME_DESIGN, &GLOBEX_FRONTEND, &ACME_BACKEND])
    );
}

#[tokio::test]
async fn list_paginated() {
    let Some(db) = setup().await else {
        return;
    };
    let mut txn = db.begin_transaction().await.unwrap();

    let predicate = JobPredicate::Company(ACME.id);
    let slice = PaginationSlice {
        limit: 2.try_into().unwrap(),
        offset: 1,
    };

    let result = REPO
        .list_entries(&mut txn, &predicate, Some(slice))
        .await
        .unwrap();
    assert_eq!(result, entries(&[&ACME_BACKEND, &ACME_ARCHIVED]));

    let result = REPO.count(&mut txn, &predicate).await.unwrap();
    assert_eq!(result, 3);
}

#[tokio::test]
async fn update_and_set_categories() {
    let Some(db) = setup().await else {
        return;
    };

    let patch = JobPostingPatch::new()
        .update_title("Staff Backend Developer".try_into().unwrap())
        .update_active(false);

    let mut txn = db.begin_transaction().await.unwrap();
    assert!(REPO
        .update_job(&mut txn, ACME_BACKEND.id, &patch)
        .await
        .unwrap());
    REPO.set_job_categories(&mut txn, ACME_BACKEND.id, vec![FRONTEND.id, BACKEND.id])
        .await
        .unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO
        .get_entry(&mut txn, ACME_BACKEND.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result.job.title.as_str(), "Staff Backend Developer");
    assert!(!result.job.active);
    assert_eq!(result.categories, [BACKEND.clone(), FRONTEND.clone()]);

    assert!(!REPO
        .update_job(&mut txn, UUID1.into(), &patch)
        .await
        .unwrap());
}
