//! Plain-text route configuration.

use crate::api::handlers::{health_handler, robots_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public plain-text routes. Never rate limited.
///
/// # Endpoints
///
/// - `GET /healthz`    - Liveness check
/// - `GET /robots.txt` - Crawler directives
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/robots.txt", get(robots_handler))
}
