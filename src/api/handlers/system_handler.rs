//! Welcome, health and info endpoints.

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::Config;
use crate::types::ApiResponse;

/// Endpoint map advertised by `/` and `/api/info`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Endpoints {
    pub users: String,
    pub health: String,
    pub info: String,
    pub docs: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            users: "/api/users".to_string(),
            health: "/api/health".to_string(),
            info: "/api/info".to_string(),
            docs: "/swagger-ui".to_string(),
        }
    }
}

/// Root payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Welcome {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub debug: bool,
    pub endpoints: Endpoints,
}

/// Health payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Health {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// "connected" or "unreachable"
    pub database: String,
    pub environment: String,
    pub version: String,
}

/// Backend selection, without credentials
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Backends {
    /// "minio" or "s3"
    pub storage: String,
    pub storage_bucket: String,
    /// "explicit" or "default-chain"
    pub ai_credentials: String,
    pub ai_region: String,
}

impl From<&Config> for Backends {
    fn from(config: &Config) -> Self {
        let storage = config.storage_backend();
        let ai = config.ai_credentials();
        Self {
            storage: storage.kind().to_string(),
            storage_bucket: storage.bucket().to_string(),
            ai_credentials: ai.kind().to_string(),
            ai_region: ai.region().to_string(),
        }
    }
}

/// Info payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Info {
    pub name: String,
    pub version: String,
    pub description: String,
    pub environment: String,
    pub backends: Backends,
    pub endpoints: Endpoints,
}

/// Root endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses((status = 200, description = "Welcome message", body = Welcome))
)]
pub async fn root(State(state): State<AppState>) -> ApiResponse<Welcome> {
    let config = &state.config;
    let welcome = Welcome {
        name: config.app_name.clone(),
        version: config.app_version.clone(),
        environment: config.environment.to_string(),
        debug: config.debug,
        endpoints: Endpoints::default(),
    };

    ApiResponse::ok(welcome, format!("Welcome to {}", config.app_name))
}

/// Health check with database connectivity
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Service and database are reachable", body = Health),
        (status = 503, description = "Database is unreachable", body = Health)
    )
)]
pub async fn health(State(state): State<AppState>) -> ApiResponse<Health> {
    let config = &state.config;
    let reachable = match state.database.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            false
        }
    };

    let health = Health {
        status: if reachable { "healthy" } else { "unhealthy" }.to_string(),
        database: if reachable { "connected" } else { "unreachable" }.to_string(),
        environment: config.environment.to_string(),
        version: config.app_version.clone(),
    };

    if reachable {
        ApiResponse::ok(health, "API is healthy")
    } else {
        ApiResponse::with_status(StatusCode::SERVICE_UNAVAILABLE, health, "API is unhealthy")
    }
}

/// Application and backend information
#[utoipa::path(
    get,
    path = "/api/info",
    tag = "System",
    responses((status = 200, description = "Application information", body = Info))
)]
pub async fn info(State(state): State<AppState>) -> ApiResponse<Info> {
    let config = state.config.as_ref();
    let info = Info {
        name: config.app_name.clone(),
        version: config.app_version.clone(),
        description: "User directory REST API with search".to_string(),
        environment: config.environment.to_string(),
        backends: Backends::from(config),
        endpoints: Endpoints::default(),
    };

    ApiResponse::ok(info, config.app_name.clone())
}
