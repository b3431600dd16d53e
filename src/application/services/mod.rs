//! Business logic services for the application layer.

pub mod embed_service;

pub use embed_service::EmbedService;
