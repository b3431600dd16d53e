//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::EmbedService;
use crate::domain::providers::EmbedProvider;

/// State shared by all requests. Holds no mutable data.
#[derive(Clone)]
pub struct AppState {
    pub embed_service: Arc<EmbedService>,
}

impl AppState {
    /// Creates state around an embed provider.
    pub fn new(provider: Arc<dyn EmbedProvider>) -> Self {
        Self {
            embed_service: Arc::new(EmbedService::new(provider)),
        }
    }
}
