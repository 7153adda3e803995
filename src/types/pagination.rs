//! Offset/limit windows for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use crate::domain::UserResponse;

/// Raw `skip`/`limit` query parameters.
///
/// Kept signed so out-of-range values reach the clamp instead of failing
/// deserialization.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Rows to skip (negative values are treated as 0)
    #[serde(default)]
    pub skip: i64,
    /// Rows to return (values outside 1..=1000 fall back to 100)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIST_LIMIT as i64
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

/// A clamped offset/limit pair, always safe to hand to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u64,
}

impl PageWindow {
    /// Coerce caller input into a valid window.
    ///
    /// Negative `skip` becomes 0; `limit` outside `1..=MAX_LIST_LIMIT`
    /// becomes `DEFAULT_LIST_LIMIT`.
    pub fn clamp(skip: i64, limit: i64) -> Self {
        let skip = u64::try_from(skip).unwrap_or(0);
        let limit = match u64::try_from(limit) {
            Ok(l) if l > 0 && l <= MAX_LIST_LIMIT => l,
            _ => DEFAULT_LIST_LIMIT,
        };
        Self { skip, limit }
    }
}

impl From<ListParams> for PageWindow {
    fn from(params: ListParams) -> Self {
        Self::clamp(params.skip, params.limit)
    }
}

/// `GET /api/users` payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserList {
    pub users: Vec<UserResponse>,
    /// Total number of users in the store
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
    /// Number of users in this page
    pub count: usize,
}

impl UserList {
    pub fn new(users: Vec<UserResponse>, total: u64, window: PageWindow) -> Self {
        Self {
            count: users.len(),
            users,
            total,
            skip: window.skip,
            limit: window.limit,
        }
    }
}

/// `GET /api/users/search` payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserSearchResult {
    pub users: Vec<UserResponse>,
    pub count: usize,
    pub query: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
