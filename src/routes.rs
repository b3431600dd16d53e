//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`           - Input form
//! - `POST /view`       - Embed lookup (rate limited)
//! - `GET  /healthz`    - Liveness check
//! - `GET  /robots.txt` - Crawler directives
//! - `/static/*`        - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/view` only
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - supplies the static asset directory and `/view` rate limits
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let lookup_router = web::routes::lookup_routes().layer(rate_limit::layer(
        config.view_rate_period_seconds,
        config.view_rate_burst,
    ));

    let router = Router::new()
        .merge(web::routes::public_routes())
        .merge(lookup_router)
        .merge(api::routes::public_routes())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
