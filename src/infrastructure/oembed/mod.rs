//! oEmbed HTTP integration.
//!
//! Provides [`HttpEmbedProvider`], the production implementation of
//! [`crate::domain::providers::EmbedProvider`].

mod http_provider;

pub use http_provider::{DEFAULT_OEMBED_ENDPOINT, DEFAULT_TIMEOUT, HttpEmbedProvider};
