//! Correlation id middleware.
//!
//! Every request runs inside a span tagged with a correlation id, taken from
//! the incoming `X-Correlation-ID` header or generated, and the id is echoed
//! back on the response.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::CORRELATION_ID_HEADER;

fn incoming_id(request: &Request) -> Option<String> {
    request
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Tag the request with a correlation id and log its start and end.
pub async fn correlation_middleware(request: Request, next: Next) -> Response {
    let correlation_id = incoming_id(&request).unwrap_or_else(|| Uuid::new_v4().to_string());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!("request", correlation_id = %correlation_id);
    let started = Instant::now();

    let mut response = async {
        tracing::info!(%method, %path, "Request started");
        let response = next.run(request).await;
        tracing::info!(
            %method,
            %path,
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request completed"
        );
        response
    }
    .instrument(span)
    .await;

    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(CORRELATION_ID_HEADER), value);
    }

    response
}
