//! Application configuration module
//!
//! Handles environment variables, application-wide constants and the
//! local/production backend selection.

mod backends;
mod constants;
mod settings;

pub use backends::{AwsCredentials, Environment, StorageBackend};
pub use constants::*;
pub use settings::Config;
