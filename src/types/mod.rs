//! Shared request and response types.

mod pagination;
mod response;

pub use pagination::{ListParams, PageWindow, UserList, UserSearchResult};
pub use response::ApiResponse;
