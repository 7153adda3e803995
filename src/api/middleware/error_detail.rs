//! Debug-only exposure of server error causes.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::errors::{error_envelope, ErrorDetail};

/// Replace the generic message of a 500 with the underlying cause.
pub async fn expose_error_details(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    match response.extensions().get::<ErrorDetail>().cloned() {
        Some(ErrorDetail(detail)) => error_envelope(response.status(), detail, None),
        None => response,
    }
}
