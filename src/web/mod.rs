//! Web layer for browser-based UI.
//!
//! Provides the input form and the result pages. Uses Askama templates for
//! server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
