//! # TikTok Viewer
//!
//! A small web service that renders public TikTok posts without requiring the
//! visitor to open TikTok itself. Built with Axum and Askama.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation as a larger service, even though
//! the core is a single request/response transform:
//!
//! - **Domain Layer** ([`domain`]) - Input classification, render results, provider trait
//! - **Application Layer** ([`application`]) - Resolution logic and error folding
//! - **Infrastructure Layer** ([`infrastructure`]) - The oEmbed HTTP client
//! - **API Layer** ([`api`]) - Plain-text endpoints and middleware
//! - **Web Layer** ([`web`]) - HTML form and result pages
//!
//! ## Request Flow
//!
//! 1. The visitor submits `tiktok_input` to `POST /view`
//! 2. Input is trimmed and classified as `@handle` or post URL
//! 3. Handles are turned into a profile link without any network call
//! 4. Post URLs are resolved through `https://www.tiktok.com/oembed`
//! 5. The embed (or a readable error) is rendered as HTML
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"   # Optional
//! export LOG_FORMAT="json"         # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::EmbedError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::EmbedService;
    pub use crate::domain::input::{ClassifiedInput, classify};
    pub use crate::domain::oembed::OEmbedResponse;
    pub use crate::domain::providers::EmbedProvider;
    pub use crate::domain::render::RenderResult;
    pub use crate::error::EmbedError;
    pub use crate::infrastructure::oembed::HttpEmbedProvider;
    pub use crate::state::AppState;
}
