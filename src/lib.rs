//! User Directory - CRUD API for user records
//!
//! This crate exposes HTTP endpoints to create, read, update, delete and
//! search users stored in a relational table, built on a generic
//! repository layer with a thin validating domain service on top.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration, constants and backend selection
//! - **domain**: Core business entities and validation rules
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories, seeders)
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, response envelope)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Insert sample users
//! cargo run -- seed --clear
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserChanges};
pub use errors::{AppError, AppResult};
