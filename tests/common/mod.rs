#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tiktok_viewer::domain::oembed::OEmbedResponse;
use tiktok_viewer::domain::providers::EmbedProvider;
use tiktok_viewer::error::EmbedError;
use tiktok_viewer::state::AppState;

pub const POST_URL: &str = "https://www.tiktok.com/@u/video/123";
pub const EMBED_HTML: &str = "<blockquote>...</blockquote>";

/// Provider returning a canned answer and counting calls.
pub struct StubProvider {
    answer: Result<OEmbedResponse, EmbedError>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(answer: Result<OEmbedResponse, EmbedError>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn with_html(html: &str) -> Arc<Self> {
        Self::new(Ok(OEmbedResponse {
            html: Some(html.to_string()),
        }))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbedProvider for StubProvider {
    async fn fetch(&self, _url: &str) -> Result<OEmbedResponse, EmbedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

pub fn create_test_state(provider: Arc<dyn EmbedProvider>) -> AppState {
    AppState::new(provider)
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}
