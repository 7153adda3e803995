//! Domain layer - Core business entities and rules
//!
//! This module contains the user entity and the name rules enforced by
//! the service layer, independent of infrastructure concerns.

pub mod user;

pub use user::{
    validate_id, validate_names, CreateUser, UpdateUser, User, UserChanges, UserResponse,
};
