//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of rows returned by list queries
pub const DEFAULT_LIST_LIMIT: u64 = 100;

/// Largest accepted list limit; anything above falls back to the default
pub const MAX_LIST_LIMIT: u64 = 1000;

// =============================================================================
// Validation
// =============================================================================

/// Maximum length of a first or last name, in characters, after trimming
pub const MAX_NAME_LENGTH: usize = 100;

/// Length of a hyphenated UUID, used as the primary key column width
pub const USER_ID_LENGTH: u32 = 36;

// =============================================================================
// Application
// =============================================================================

/// Default application name reported by the info endpoints
pub const DEFAULT_APP_NAME: &str = "User Directory API";

/// Default application version (the crate version)
pub const DEFAULT_APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Correlation id header, read from requests and echoed on responses
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

// =============================================================================
// Environment
// =============================================================================

/// Environment name for local development
pub const ENV_LOCAL: &str = "local";

/// Environment name for production deployments
pub const ENV_PRODUCTION: &str = "production";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_NAME: &str = "user_directory";
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_PASSWORD: &str = "postgres";

// =============================================================================
// Storage / AWS
// =============================================================================

/// Default AWS region for production backends
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Default MinIO endpoint for local development
pub const DEFAULT_MINIO_ENDPOINT: &str = "localhost:9000";

/// Default MinIO credentials (MinIO's own defaults)
pub const DEFAULT_MINIO_ACCESS_KEY: &str = "minioadmin";
pub const DEFAULT_MINIO_SECRET_KEY: &str = "minioadmin";

/// Default storage bucket
pub const DEFAULT_STORAGE_BUCKET: &str = "user-directory-storage";

// =============================================================================
// Seed data
// =============================================================================

/// Sample users inserted by `seed`
pub const SAMPLE_USERS: &[(&str, &str)] = &[("Alice", "Smith"), ("Bob", "Johnson")];
