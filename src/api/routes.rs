//! Application route configuration.

use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::system_handler::{health, info, root};
use super::handlers::user_routes;
use super::middleware::{correlation_middleware, expose_error_details};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let debug = state.config.debug;

    let mut router = Router::new()
        .route("/", get(root))
        .nest("/api", api_routes());

    // Docs and raw error causes are only served while debugging
    if debug {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .layer(middleware::from_fn(expose_error_details));
    }

    // Global middleware
    let router = router
        .layer(middleware::from_fn(correlation_middleware))
        .layer(TraceLayer::new_for_http());

    let router = if debug {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .nest("/users", user_routes())
}
