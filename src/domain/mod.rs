//! Domain layer containing the input model and the outbound provider contract.
//!
//! Nothing here performs I/O. The types describe what a visitor submitted,
//! what the oEmbed endpoint answers, and what gets rendered back.
//!
//! # Architecture
//!
//! - [`input`] - Classification of raw visitor input
//! - [`oembed`] - oEmbed response wire type
//! - [`render`] - The three render outcomes
//! - [`providers`] - Trait for fetching embed markup
//!
//! # Resolution Flow
//!
//! 1. [`input::classify`] splits input into profile handles and post URL candidates
//! 2. Profiles become [`render::RenderResult::ProfileHint`] directly
//! 3. Post URLs go through a [`providers::EmbedProvider`]
//! 4. The outcome is folded into a [`render::RenderResult`] by
//!    [`crate::application::services::EmbedService`]

pub mod input;
pub mod oembed;
pub mod providers;
pub mod render;
