//! HTTP request handlers for plain-text endpoints.

pub mod health;
pub mod robots;

pub use health::health_handler;
pub use robots::robots_handler;
