//! Seed command - Inserts sample data.

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::seeders::all_seeders;
use crate::infra::{run_seeder, Database};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;

    let seeders: Vec<_> = all_seeders()
        .into_iter()
        .filter(|s| args.seeder.as_deref().map_or(true, |name| s.name() == name))
        .collect();

    if seeders.is_empty() {
        let available: Vec<&str> = all_seeders().iter().map(|s| s.name()).collect();
        return Err(AppError::bad_request(format!(
            "Unknown seeder '{}'. Available seeders: {}",
            args.seeder.unwrap_or_default(),
            available.join(", ")
        )));
    }

    tracing::info!(environment = %config.environment, clear = args.clear, "Seeding database");

    for seeder in &seeders {
        run_seeder(seeder.as_ref(), db.connection(), args.clear).await?;
    }

    tracing::info!("All seeders completed successfully");
    Ok(())
}
