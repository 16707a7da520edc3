use std::{ops::Deref, sync::LazyLock};

use jobboard_demo::DemoRepositories;
use jobboard_persistence_contracts::{Database, Transaction};
use jobboard_persistence_postgres::{
    account::PostgresAccountRepository, application::PostgresApplicationRepository,
    catalog::PostgresCatalogRepository, company::PostgresCompanyRepository,
    notification::PostgresNotificationRepository, preference::PostgresPreferenceRepository,
    saved::PostgresSavedJobRepository, PostgresDatabase, PostgresDatabaseConfig,
};
use tokio::sync::{Mutex, MutexGuard};

pub const DATABASE_URL_VAR: &str = "JOBBOARD_TEST_DATABASE_URL";

/// Every test resets the shared schema, so they must not overlap.
static LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub struct Db {
    db: PostgresDatabase,
    _guard: MutexGuard<'static, ()>,
}

impl Deref for Db {
    type Target = PostgresDatabase;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}

/// Returns a migrated database filled with the demo dataset, or `None` if
/// no test database is configured.
pub async fn setup() -> Option<Db> {
    let db = setup_clean().await?;

    db.run_migrations(None).await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();

    jobboard_demo::create(
        &mut txn,
        DemoRepositories {
            account: PostgresAccountRepository,
            company: PostgresCompanyRepository,
            catalog: PostgresCatalogRepository,
            preference: PostgresPreferenceRepository,
            application: PostgresApplicationRepository,
            saved_job: PostgresSavedJobRepository,
            notification: PostgresNotificationRepository,
        },
    )
    .await
    .unwrap();

    txn.commit().await.unwrap();

    Some(db)
}

/// Returns an empty database without any migrations applied.
pub async fn setup_clean() -> Option<Db> {
    let Ok(url) = std::env::var(DATABASE_URL_VAR) else {
        eprintln!("{DATABASE_URL_VAR} is not set, skipping");
        return None;
    };

    let guard = LOCK.lock().await;

    let config = jobboard_config::load().unwrap();

    let db = PostgresDatabase::connect(&PostgresDatabaseConfig {
        url,
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        acquire_timeout: config.database.acquire_timeout.into(),
        idle_timeout: config.database.idle_timeout.map(Into::into),
        max_lifetime: config.database.max_lifetime.map(Into::into),
    })
    .await
    .unwrap();

    db.reset().await.unwrap();

    Some(Db { db, _guard: guard })
}
