//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");
    config.server_host = args.host;
    config.server_port = args.port;

    tracing::info!(
        environment = %config.environment,
        storage = ?config.storage_backend(),
        ai = ?config.ai_credentials(),
        "Backends selected"
    );

    // Initialize database (applies pending migrations)
    let db = Arc::new(Database::connect(&config).await?);

    let addr = config.server_addr();
    let app_state = AppState::from_config(db, config);

    // Build router
    let app = create_router(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
