//! Provider trait for fetching oEmbed data.

use crate::domain::oembed::OEmbedResponse;
use crate::error::EmbedError;
use async_trait::async_trait;

/// Fetches the oEmbed representation of a post URL.
///
/// Implementations must be safe to share across concurrent requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::oembed::HttpEmbedProvider`] - reqwest client for TikTok
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbedProvider: Send + Sync {
    /// Performs a single lookup for `url`. No retries.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::UpstreamStatus`] for 4xx/5xx answers and
    /// [`EmbedError::Unexpected`] for transport, timeout and decoding failures.
    /// A successful answer without `html` is *not* an error at this level.
    async fn fetch(&self, url: &str) -> Result<OEmbedResponse, EmbedError>;
}
