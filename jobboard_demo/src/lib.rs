//! A small, deterministic dataset used by tests and `jobboard migrate demo`.

use jobboard_persistence_contracts::{
    account::AccountRepository, application::ApplicationRepository, catalog::CatalogRepository,
    company::CompanyRepository, notification::NotificationRepository,
    preference::PreferenceRepository, saved::SavedJobRepository,
};
use uuid::{uuid, Uuid};

pub mod account;
pub mod application;
pub mod catalog;
pub mod company;
pub mod notification;

/// An id not used by any demo entity.
pub const UUID1: Uuid = uuid!("eb1cd87a-4475-4d68-a2c2-0216bdaac8f7");
pub const UUID2: Uuid = uuid!("0190d1f8-7d3a-7c4e-8b55-2f8e4a1c9d01");

pub struct DemoRepositories<
    AccountRepo,
    CompanyRepo,
    CatalogRepo,
    PreferenceRepo,
    ApplicationRepo,
    SavedJobRepo,
    NotificationRepo,
> {
    pub account: AccountRepo,
    pub company: CompanyRepo,
    pub catalog: CatalogRepo,
    pub preference: PreferenceRepo,
    pub application: ApplicationRepo,
    pub saved_job: SavedJobRepo,
    pub notification: NotificationRepo,
}

pub async fn create<
    Txn,
    AccountRepo,
    CompanyRepo,
    CatalogRepo,
    PreferenceRepo,
    ApplicationRepo,
    SavedJobRepo,
    NotificationRepo,
>(
    txn: &mut Txn,
    repos: DemoRepositories<
        AccountRepo,
        CompanyRepo,
        CatalogRepo,
        PreferenceRepo,
        ApplicationRepo,
        SavedJobRepo,
        NotificationRepo,
    >,
) -> anyhow::Result<()>
where
    Txn: Send + Sync + 'static,
    AccountRepo: AccountRepository<Txn>,
    CompanyRepo: CompanyRepository<Txn>,
    CatalogRepo: CatalogRepository<Txn>,
    PreferenceRepo: PreferenceRepository<Txn>,
    ApplicationRepo: ApplicationRepository<Txn>,
    SavedJobRepo: SavedJobRepository<Txn>,
    NotificationRepo: NotificationRepository<Txn>,
{
    company::create(txn, &repos.company).await?;
    account::create(txn, &repos.account).await?;
    catalog::create(txn, &repos.catalog).await?;
    application::create(
        txn,
        &repos.preference,
        &repos.application,
        &repos.saved_job,
    )
    .await?;
    notification::create(txn, &repos.notification).await?;
    Ok(())
}
