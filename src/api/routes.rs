//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers::{get_handler, health_handler, not_found_handler, put_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /put` - Insert or update a key
/// - `GET /get?key=` - Look a key up
/// - `GET /health` - Liveness probe
///
/// Anything else, including a known path with the wrong method, is a 404.
/// HEAD is routed to the fallback explicitly because axum would otherwise
/// answer it with the GET handler.
///
/// # Middleware
/// - Timeout: Aborts requests that exceed `request_timeout`
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/put", post(put_handler).fallback(not_found_handler))
        .route(
            "/get",
            get(get_handler)
                .head(not_found_handler)
                .fallback(not_found_handler),
        )
        .route(
            "/health",
            get(health_handler)
                .head(not_found_handler)
                .fallback(not_found_handler),
        )
        .fallback(not_found_handler)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
