//! Outbound provider trait definitions.
//!
//! Traits here abstract the external services the domain depends on.
//! Implementations live in `crate::infrastructure`; mocks are generated via
//! `mockall` for unit tests.

pub mod embed_provider;

pub use embed_provider::EmbedProvider;

#[cfg(test)]
pub use embed_provider::MockEmbedProvider;
