use crate::api::records::records::{create_record, delete_record, list_records, update_record};
use crate::app_state::AppState;
use crate::health;

use axum::{
    Router,
    http::HeaderValue,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints.
///
/// Unmatched verbs on /api/data get axum's method-router fallback: 405 with
/// an Allow header listing the supported methods.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(state.api.base_url.as_deref());

    Router::new()
        // The single data route of the admin form
        .route(
            "/api/data",
            get(list_records)
                .post(create_record)
                .patch(update_record)
                .delete(delete_record),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        .layer(cors)
}

/// Lock CORS to the configured client origin; stay permissive when none is
/// configured (development mode).
fn cors_layer(base_url: Option<&str>) -> CorsLayer {
    match base_url.and_then(|url| url.parse::<HeaderValue>().ok()) {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    }
}
