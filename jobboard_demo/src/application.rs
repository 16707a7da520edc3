use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use jobboard_models::{
    account::AccountId,
    application::{ApplicationRequest, ApplicationStatus, SavedJob},
    job::JobCategory,
};
use jobboard_persistence_contracts::{
    application::ApplicationRepository, preference::PreferenceRepository,
    saved::SavedJobRepository,
};
use uuid::uuid;

use crate::{
    account::{ALICE, BOB, CAROL},
    catalog::{ACME_BACKEND, ACME_DESIGN, BACKEND, GLOBEX_FRONTEND, UI_DESIGN},
};

pub static ALL_APPLICATIONS: LazyLock<Vec<&ApplicationRequest>> =
    LazyLock::new(|| vec![&CAROL_ACME_BACKEND, &BOB_ACME_DESIGN]);

pub static ALL_SAVED_JOBS: LazyLock<Vec<&SavedJob>> =
    LazyLock::new(|| vec![&ALICE_SAVED_GLOBEX_FRONTEND]);

/// Preference sets of the demo seekers. Bob has none.
pub static ALL_PREFERENCES: LazyLock<Vec<(AccountId, Vec<&JobCategory>)>> = LazyLock::new(|| {
    vec![
        (ALICE.id, vec![&BACKEND]),
        (CAROL.id, vec![&UI_DESIGN]),
    ]
});

pub static CAROL_ACME_BACKEND: LazyLock<ApplicationRequest> = LazyLock::new(|| ApplicationRequest {
    id: uuid!("a9910000-0000-4000-8000-000000000001").into(),
    seeker_id: CAROL.id,
    job_id: ACME_BACKEND.id,
    status: ApplicationStatus::Pending,
    cover_letter: Some("I have been writing backend services for years.".try_into().unwrap()),
    submitted_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    response: None,
    responded_at: None,
});

pub static BOB_ACME_DESIGN: LazyLock<ApplicationRequest> = LazyLock::new(|| ApplicationRequest {
    id: uuid!("a9910000-0000-4000-8000-000000000002").into(),
    seeker_id: BOB.id,
    job_id: ACME_DESIGN.id,
    status: ApplicationStatus::Rejected,
    cover_letter: None,
    submitted_at: Utc.with_ymd_and_hms(2024, 2, 20, 9, 30, 0).unwrap(),
    response: Some("The position has been filled.".try_into().unwrap()),
    responded_at: Some(Utc.with_ymd_and_hms(2024, 2, 22, 15, 0, 0).unwrap()),
});

pub static ALICE_SAVED_GLOBEX_FRONTEND: LazyLock<SavedJob> = LazyLock::new(|| SavedJob {
    seeker_id: ALICE.id,
    job_id: GLOBEX_FRONTEND.id,
    saved_at: Utc.with_ymd_and_hms(2024, 2, 6, 18, 0, 0).unwrap(),
});

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    preference_repo: &impl PreferenceRepository<Txn>,
    application_repo: &impl ApplicationRepository<Txn>,
    saved_job_repo: &impl SavedJobRepository<Txn>,
) -> anyhow::Result<()> {
    for (seeker_id, categories) in &*ALL_PREFERENCES {
        preference_repo
            .replace(txn, *seeker_id, categories.iter().map(|c| c.id).collect())
            .await?;
    }
    for &request in &*ALL_APPLICATIONS {
        application_repo.create(txn, request).await?;
    }
    for &saved_job in &*ALL_SAVED_JOBS {
        saved_job_repo.save(txn, saved_job).await?;
    }
    Ok(())
}
