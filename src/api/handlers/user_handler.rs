//! User handlers.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::extractors::{ApiQuery, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateUser, UpdateUser, UserResponse};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::{ApiResponse, ListParams, PageWindow, UserList, UserSearchResult};

/// Search query parameters; the first non-empty one is used
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Matches first OR last name
    pub query: Option<String>,
    /// Matches first name only
    pub first_name: Option<String>,
    /// Matches last name only
    pub last_name: Option<String>,
}

/// Payload returned after a delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedUser {
    pub id: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/search", get(search_users))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

fn not_found(id: &str) -> String {
    format!("User with id '{}' not found", id)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed body"),
        (status = 409, description = "A user with this name already exists"),
        (status = 422, description = "Invalid names")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateUser>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state
        .user_service
        .create_user(&body.first_name, &body.last_name)
        .await?;

    Ok(ApiResponse::created(
        UserResponse::from(user),
        "User created successfully",
    ))
}

/// List users with skip/limit paging
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(ListParams),
    responses(
        (status = 200, description = "Page of users with the total count", body = UserList)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<ApiResponse<UserList>> {
    let users = state
        .user_service
        .list_users(params.skip, params.limit)
        .await?;
    let total = state.user_service.get_user_count().await?;

    let users = users.into_iter().map(UserResponse::from).collect();
    let window = PageWindow::from(params);

    Ok(ApiResponse::ok(
        UserList::new(users, total, window),
        "Users retrieved successfully",
    ))
}

/// Search users by name
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = "Users",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching users", body = UserSearchResult),
        (status = 422, description = "No search parameter supplied")
    )
)]
pub async fn search_users(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> AppResult<ApiResponse<UserSearchResult>> {
    let service = &state.user_service;

    let users = if let Some(query) = present(&params.query) {
        service.search_users(query).await?
    } else if let Some(first_name) = present(&params.first_name) {
        service.get_users_by_first_name(first_name).await?
    } else if let Some(last_name) = present(&params.last_name) {
        service.get_users_by_last_name(last_name).await?
    } else {
        return Err(AppError::validation(
            "At least one search parameter (query, first_name, or last_name) is required",
        ));
    };

    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    let result = UserSearchResult {
        count: users.len(),
        users,
        query: params.query,
        first_name: params.first_name,
        last_name: params.last_name,
    };

    Ok(ApiResponse::ok(result, "User search completed successfully"))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state
        .user_service
        .get_user_by_id(&id)
        .await?
        .ok_or_not_found(not_found(&id))?;

    Ok(ApiResponse::ok(
        UserResponse::from(user),
        "User retrieved successfully",
    ))
}

/// Update user names; omitted fields are kept
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 409, description = "Another user already has this name"),
        (status = 422, description = "Invalid names")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateUser>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state
        .user_service
        .update_user(&id, body.into())
        .await?
        .ok_or_not_found(not_found(&id))?;

    Ok(ApiResponse::ok(
        UserResponse::from(user),
        "User updated successfully",
    ))
}

/// Delete user permanently
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = DeletedUser),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<DeletedUser>> {
    if !state.user_service.delete_user(&id).await? {
        return Err(AppError::not_found(not_found(&id)));
    }

    Ok(ApiResponse::ok(DeletedUser { id }, "User deleted successfully"))
}
