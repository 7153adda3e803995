use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Standard API response envelope.
///
/// Errors use the same shape (see `AppError`'s `IntoResponse`), so every
/// body carries `success`, `message` and `status_code`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub status_code: u16,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with data
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, data, message)
    }

    /// 201 with the created resource
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::CREATED, data, message)
    }

    pub fn with_status(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            success: status.is_success(),
            message: message.into(),
            data: Some(data),
            status_code: status.as_u16(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
