//! Application layer services implementing the resolution logic.
//!
//! Services consume provider traits from the domain layer and expose a small
//! API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::embed_service::EmbedService`] - Turns raw input into a render result

pub mod services;
