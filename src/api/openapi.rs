//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{system_handler, user_handler};
use crate::domain::{CreateUser, UpdateUser, UserResponse};
use crate::types::{UserList, UserSearchResult};

/// OpenAPI documentation for the User Directory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory API",
        description = "Create, read, update, delete and search users",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // System endpoints
        system_handler::root,
        system_handler::health,
        system_handler::info,
        // User endpoints
        user_handler::create_user,
        user_handler::list_users,
        user_handler::search_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            CreateUser,
            UpdateUser,
            // Response payloads
            UserList,
            UserSearchResult,
            user_handler::DeletedUser,
            system_handler::Welcome,
            system_handler::Health,
            system_handler::Info,
            system_handler::Backends,
            system_handler::Endpoints,
        )
    ),
    tags(
        (name = "System", description = "Welcome, health and info"),
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_user_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/users"));
        assert!(paths.contains_key("/api/users/search"));
        assert!(paths.contains_key("/api/users/{id}"));
        assert!(paths.contains_key("/api/health"));
    }
}
