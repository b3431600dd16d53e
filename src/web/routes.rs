//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, view_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Home page route.
///
/// # Endpoints
///
/// - `GET /` - Input form
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}

/// Embed lookup route. Each request may call oEmbed, so callers wrap it in
/// a rate limiter.
///
/// # Endpoints
///
/// - `POST /view` - Resolve input and render the result
pub fn lookup_routes() -> Router<AppState> {
    Router::new().route("/view", post(view_handler))
}
