//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`oembed`] - HTTP client for TikTok's oEmbed endpoint

pub mod oembed;
