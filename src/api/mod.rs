use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod handlers;

/// Build the HTTP router. The caller supplies the shared state, so tests
/// can mount this against a fresh store.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route(
            "/approval_requests",
            get(handlers::list_approval_requests).post(handlers::request_approval),
        )
        .route(
            "/approval_requests/:id",
            get(handlers::get_approval_request).delete(handlers::archive_approval_request),
        )
        .route(
            "/approval_requests/:id/decisions",
            post(handlers::decide_on_approval_request),
        )
        .layer(TraceLayer::new_for_http())
        .fallback(fallback_404)
}

async fn fallback_404() -> StatusCode {
    StatusCode::NOT_FOUND
}
