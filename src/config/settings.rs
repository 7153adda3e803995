//! Application settings loaded from environment variables.

use std::env;

use super::backends::Environment;
use super::constants::{
    DEFAULT_APP_NAME, DEFAULT_APP_VERSION, DEFAULT_AWS_REGION, DEFAULT_DB_HOST, DEFAULT_DB_NAME,
    DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT, DEFAULT_DB_USER, DEFAULT_MINIO_ACCESS_KEY,
    DEFAULT_MINIO_ENDPOINT, DEFAULT_MINIO_SECRET_KEY, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_STORAGE_BUCKET,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub environment: Environment,
    pub debug: bool,
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub app_name: String,
    pub app_version: String,
    pub aws_region: String,
    pub(crate) aws_access_key_id: Option<String>,
    pub(crate) aws_secret_access_key: Option<String>,
    pub minio_endpoint: String,
    pub(crate) minio_access_key: String,
    pub(crate) minio_secret_key: String,
    pub minio_secure: bool,
    pub storage_bucket: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("debug", &self.debug)
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("app_name", &self.app_name)
            .field("app_version", &self.app_version)
            .field("aws_region", &self.aws_region)
            .field("aws_access_key_id", &self.aws_access_key_id.as_ref().map(|_| "[REDACTED]"))
            .field("aws_secret_access_key", &self.aws_secret_access_key.as_ref().map(|_| "[REDACTED]"))
            .field("minio_endpoint", &self.minio_endpoint)
            .field("minio_access_key", &"[REDACTED]")
            .field("minio_secret_key", &"[REDACTED]")
            .field("minio_secure", &self.minio_secure)
            .field("storage_bucket", &self.storage_bucket)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            debug: true,
            database_url: database_url_from_parts(
                DEFAULT_DB_USER,
                DEFAULT_DB_PASSWORD,
                DEFAULT_DB_HOST,
                DEFAULT_DB_PORT,
                DEFAULT_DB_NAME,
            ),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            app_name: DEFAULT_APP_NAME.to_string(),
            app_version: DEFAULT_APP_VERSION.to_string(),
            aws_region: DEFAULT_AWS_REGION.to_string(),
            aws_access_key_id: None,
            aws_secret_access_key: None,
            minio_endpoint: DEFAULT_MINIO_ENDPOINT.to_string(),
            minio_access_key: DEFAULT_MINIO_ACCESS_KEY.to_string(),
            minio_secret_key: DEFAULT_MINIO_SECRET_KEY.to_string(),
            minio_secure: false,
            storage_bucket: DEFAULT_STORAGE_BUCKET.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is assembled from
    /// the `DB_*` variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment = env::var("ENV")
            .map(|v| Environment::from(v.as_str()))
            .unwrap_or_default();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            database_url_from_parts(
                &var_or("DB_USER", DEFAULT_DB_USER),
                &var_or("DB_PASSWORD", DEFAULT_DB_PASSWORD),
                &var_or("DB_HOST", DEFAULT_DB_HOST),
                parsed_or("DB_PORT", DEFAULT_DB_PORT),
                &var_or("DB_NAME", DEFAULT_DB_NAME),
            )
        });

        Self {
            environment,
            debug: flag_or("DEBUG", true),
            database_url,
            server_host: var_or("SERVER_HOST", DEFAULT_SERVER_HOST),
            server_port: parsed_or("SERVER_PORT", DEFAULT_SERVER_PORT),
            app_name: var_or("APP_NAME", DEFAULT_APP_NAME),
            app_version: var_or("APP_VERSION", DEFAULT_APP_VERSION),
            aws_region: var_or("AWS_REGION", DEFAULT_AWS_REGION),
            aws_access_key_id: non_empty_var("AWS_ACCESS_KEY_ID"),
            aws_secret_access_key: non_empty_var("AWS_SECRET_ACCESS_KEY"),
            minio_endpoint: var_or("MINIO_ENDPOINT", DEFAULT_MINIO_ENDPOINT),
            minio_access_key: var_or("MINIO_ACCESS_KEY", DEFAULT_MINIO_ACCESS_KEY),
            minio_secret_key: var_or("MINIO_SECRET_KEY", DEFAULT_MINIO_SECRET_KEY),
            minio_secure: flag_or("MINIO_SECURE", false),
            storage_bucket: var_or("STORAGE_BUCKET", DEFAULT_STORAGE_BUCKET),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn database_url_from_parts(user: &str, password: &str, host: &str, port: u16, name: &str) -> String {
    format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn flag_or(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .map(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
