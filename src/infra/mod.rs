//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories
//! - Seed data

pub mod db;
pub mod repositories;
pub mod seeders;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};
pub use seeders::{run_seeder, Seeder, UserSeeder};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
