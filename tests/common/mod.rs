//! Shared helpers for integration tests.

use sea_orm::ConnectOptions;

use user_directory::infra::Database;

/// Fresh, migrated in-memory SQLite database.
///
/// A single pooled connection keeps every query on the same in-memory file.
pub async fn test_database() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let database = Database::open(options)
        .await
        .expect("failed to open in-memory database");
    database
        .run_migrations()
        .await
        .expect("failed to run migrations");
    database
}
