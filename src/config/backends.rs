//! Environment-driven backend selection.
//!
//! Local development talks to MinIO with explicit credentials; production
//! uses S3 and the default AWS credential chain. The choice is made once, at
//! startup, from [`Config`].

use serde::Serialize;

use super::constants::{ENV_LOCAL, ENV_PRODUCTION};
use super::settings::Config;

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Production,
}

impl From<&str> for Environment {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            ENV_PRODUCTION => Environment::Production,
            _ => Environment::Local,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "{}", ENV_LOCAL),
            Environment::Production => write!(f, "{}", ENV_PRODUCTION),
        }
    }
}

/// Blob storage backend
#[derive(Clone, PartialEq, Eq)]
pub enum StorageBackend {
    MinIO {
        endpoint: String,
        bucket: String,
        secure: bool,
        access_key: String,
        secret_key: String,
    },
    S3 {
        region: String,
        bucket: String,
    },
}

impl StorageBackend {
    /// Backend name without credentials
    pub fn kind(&self) -> &'static str {
        match self {
            StorageBackend::MinIO { .. } => "minio",
            StorageBackend::S3 { .. } => "s3",
        }
    }

    pub fn bucket(&self) -> &str {
        match self {
            StorageBackend::MinIO { bucket, .. } | StorageBackend::S3 { bucket, .. } => bucket,
        }
    }
}

impl std::fmt::Debug for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::MinIO {
                endpoint,
                bucket,
                secure,
                ..
            } => f
                .debug_struct("MinIO")
                .field("endpoint", endpoint)
                .field("bucket", bucket)
                .field("secure", secure)
                .field("access_key", &"[REDACTED]")
                .field("secret_key", &"[REDACTED]")
                .finish(),
            StorageBackend::S3 { region, bucket } => f
                .debug_struct("S3")
                .field("region", region)
                .field("bucket", bucket)
                .finish(),
        }
    }
}

/// Credentials for AWS-hosted AI inference
#[derive(Clone, PartialEq, Eq)]
pub enum AwsCredentials {
    /// Instance role / environment / profile chain resolved by the SDK
    DefaultChain { region: String },
    Explicit {
        region: String,
        access_key_id: String,
        secret_access_key: String,
    },
}

impl AwsCredentials {
    pub fn kind(&self) -> &'static str {
        match self {
            AwsCredentials::DefaultChain { .. } => "default-chain",
            AwsCredentials::Explicit { .. } => "explicit",
        }
    }

    pub fn region(&self) -> &str {
        match self {
            AwsCredentials::DefaultChain { region } | AwsCredentials::Explicit { region, .. } => {
                region
            }
        }
    }
}

impl std::fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("kind", &self.kind())
            .field("region", &self.region())
            .finish()
    }
}

impl Config {
    /// Select the storage backend for this environment.
    pub fn storage_backend(&self) -> StorageBackend {
        match self.environment {
            Environment::Production => StorageBackend::S3 {
                region: self.aws_region.clone(),
                bucket: self.storage_bucket.clone(),
            },
            Environment::Local => StorageBackend::MinIO {
                endpoint: self.minio_endpoint.clone(),
                bucket: self.storage_bucket.clone(),
                secure: self.minio_secure,
                access_key: self.minio_access_key.clone(),
                secret_key: self.minio_secret_key.clone(),
            },
        }
    }

    /// Select AI credentials for this environment.
    ///
    /// Local runs use explicit keys only when both halves are present and
    /// otherwise fall back to the default chain.
    pub fn ai_credentials(&self) -> AwsCredentials {
        let region = self.aws_region.clone();
        match (
            self.environment,
            &self.aws_access_key_id,
            &self.aws_secret_access_key,
        ) {
            (Environment::Local, Some(access_key_id), Some(secret_access_key)) => {
                AwsCredentials::Explicit {
                    region,
                    access_key_id: access_key_id.clone(),
                    secret_access_key: secret_access_key.clone(),
                }
            }
            _ => AwsCredentials::DefaultChain { region },
        }
    }
}
