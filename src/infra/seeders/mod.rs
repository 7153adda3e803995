//! Database seeders.
//!
//! A seeder inserts sample rows and can wipe what it owns. `run_seeder`
//! drives one seeder with logging around each step.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::AppResult;

mod user_seeder;

pub use user_seeder::UserSeeder;

/// Seeder interface
#[async_trait]
pub trait Seeder: Send + Sync {
    /// Name used in logs and on the command line
    fn name(&self) -> &'static str;

    /// Insert missing sample rows; returns how many were created
    async fn seed(&self, db: &DatabaseConnection) -> AppResult<u64>;

    /// Remove all rows owned by this seeder; returns how many were removed
    async fn clear(&self, db: &DatabaseConnection) -> AppResult<u64>;
}

/// Run a seeder, optionally clearing its data first.
pub async fn run_seeder(
    seeder: &dyn Seeder,
    db: &DatabaseConnection,
    clear_first: bool,
) -> AppResult<u64> {
    let name = seeder.name();

    if clear_first {
        tracing::info!(seeder = name, "Clearing seeded data");
        let removed = seeder.clear(db).await.map_err(|e| {
            tracing::error!(seeder = name, "Clear failed: {}", e);
            e
        })?;
        tracing::info!(seeder = name, removed, "Clear completed");
    }

    tracing::info!(seeder = name, "Running seeder");
    let created = seeder.seed(db).await.map_err(|e| {
        tracing::error!(seeder = name, "Seeder failed: {}", e);
        e
    })?;
    tracing::info!(seeder = name, created, "Seeder completed successfully");

    Ok(created)
}

/// All registered seeders, in run order
pub fn all_seeders() -> Vec<Box<dyn Seeder>> {
    vec![Box::new(UserSeeder)]
}
