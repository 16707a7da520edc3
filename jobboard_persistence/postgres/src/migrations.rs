use std::collections::HashSet;

use anyhow::Context;
use bb8_postgres::tokio_postgres::Client;
use tracing::info;

use crate::PostgresDatabase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Migration {
    pub name: &'static str,
    pub up: &'static str,
    pub down: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationStatus {
    pub migration: Migration,
    pub applied: bool,
}

/// All migrations found in the `migrations` directory, ordered by name.
pub const MIGRATIONS: &[Migration] = include!(env!("MIGRATIONS"));

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}

impl PostgresDatabase {
    pub async fn list_migrations(&self) -> anyhow::Result<Vec<MigrationStatus>> {
        let conn = self.connection().await?;
        migration_status(&conn).await
    }

    /// Applies up to `cnt` pending migrations (all if `None`) in order and
    /// returns their names.
    pub async fn run_migrations(&self, cnt: Option<usize>) -> anyhow::Result<Vec<&'static str>> {
        let mut conn = self.connection().await?;
        let pending = migration_status(&conn)
            .await?
            .into_iter()
            .filter(|status| !status.applied)
            .map(|status| status.migration)
            .take(cnt.unwrap_or(usize::MAX))
            .collect::<Vec<_>>();
        apply(&mut conn, &pending, Direction::Up).await
    }

    /// Reverts up to `cnt` applied migrations (all if `None`), newest first,
    /// and returns their names.
    pub async fn revert_migrations(&self, cnt: Option<usize>) -> anyhow::Result<Vec<&'static str>> {
        let mut conn = self.connection().await?;
        let applied = migration_status(&conn)
            .await?
            .into_iter()
            .rev()
            .filter(|status| status.applied)
            .map(|status| status.migration)
            .take(cnt.unwrap_or(usize::MAX))
            .collect::<Vec<_>>();
        apply(&mut conn, &applied, Direction::Down).await
    }
}

async fn migration_status(conn: &Client) -> anyhow::Result<Vec<MigrationStatus>> {
    conn.batch_execute("create table if not exists _migrations (name text primary key);")
        .await
        .context("Failed to create migrations table")?;

    let applied = conn
        .query("select name from _migrations", &[])
        .await
        .context("Failed to list migrations")?
        .into_iter()
        .map(|row| row.get(0))
        .collect::<HashSet<String>>();

    Ok(MIGRATIONS
        .iter()
        .map(|&migration| MigrationStatus {
            migration,
            applied: applied.contains(migration.name),
        })
        .collect())
}

/// Runs each migration in its own transaction together with the bookkeeping
/// row.
async fn apply(
    conn: &mut Client,
    migrations: &[Migration],
    direction: Direction,
) -> anyhow::Result<Vec<&'static str>> {
    let mut out = Vec::with_capacity(migrations.len());
    for migration in migrations {
        let (script, bookkeeping, action) = match direction {
            Direction::Up => (
                migration.up,
                "insert into _migrations (name) values ($1)",
                "run",
            ),
            Direction::Down => (
                migration.down,
                "delete from _migrations where name=$1",
                "revert",
            ),
        };

        let txn = conn
            .transaction()
            .await
            .context("Failed to begin transaction")?;
        txn.batch_execute(script)
            .await
            .with_context(|| format!("Failed to {action} migration {}", migration.name))?;
        txn.execute(bookkeeping, &[&migration.name])
            .await
            .with_context(|| format!("Failed to record migration {}", migration.name))?;
        txn.commit().await.context("Failed to commit transaction")?;

        info!(migration = migration.name, ?direction, "migration {action}");
        out.push(migration.name);
    }
    Ok(out)
}
