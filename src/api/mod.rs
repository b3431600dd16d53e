//! Plain-text endpoints and shared HTTP middleware.
//!
//! # Modules
//!
//! - [`handlers`] - `/healthz` and `/robots.txt`
//! - [`middleware`] - Request tracing and rate limiting
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
