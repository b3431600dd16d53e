//! reqwest-backed oEmbed client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::oembed::OEmbedResponse;
use crate::domain::providers::EmbedProvider;
use crate::error::EmbedError;

/// TikTok's public oEmbed endpoint.
pub const DEFAULT_OEMBED_ENDPOINT: &str = "https://www.tiktok.com/oembed";

/// Timeout applied to every oEmbed request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// oEmbed client backed by a pooled [`reqwest::Client`].
///
/// The client is built once and shared by all requests. Each call to
/// [`EmbedProvider::fetch`] is a single `GET <endpoint>?url=<post url>` with
/// no retries. Redirects are not followed: any non-2xx answer, 3xx included,
/// is reported as [`EmbedError::UpstreamStatus`].
pub struct HttpEmbedProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpEmbedProvider {
    /// Builds a provider for `endpoint` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Builds a provider for `endpoint` with the fixed 10 second timeout.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn with_endpoint(endpoint: impl Into<String>) -> reqwest::Result<Self> {
        Self::new(endpoint, DEFAULT_TIMEOUT)
    }

    /// Builds a provider for TikTok's endpoint.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn tiktok() -> reqwest::Result<Self> {
        Self::with_endpoint(DEFAULT_OEMBED_ENDPOINT)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, url: &str) -> Result<OEmbedResponse, EmbedError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", url)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmbedError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.json::<OEmbedResponse>().await?)
    }
}

#[async_trait]
impl EmbedProvider for HttpEmbedProvider {
    async fn fetch(&self, url: &str) -> Result<OEmbedResponse, EmbedError> {
        debug!(endpoint = %self.endpoint, %url, "Requesting oEmbed");

        self.request(url)
            .await
            .inspect_err(|err| warn!(%url, error = %err, "oEmbed request failed"))
    }
}
