//! Application state - Dependency injection container.
//!
//! Provides centralized access to the user service and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Loaded configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the SeaORM-backed repository and service over `database`.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let repo = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(repo));

        Self::new(user_service, database, Arc::new(config))
    }

    /// Create application state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        database: Arc<Database>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            user_service,
            database,
            config,
        }
    }
}
