//! Embed resolution service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::input::{ClassifiedInput, classify, is_post_url, profile_url};
use crate::domain::providers::EmbedProvider;
use crate::domain::render::RenderResult;
use crate::error::EmbedError;

/// Service that turns raw visitor input into a [`RenderResult`].
///
/// This is the single handling boundary: every failure is converted into
/// [`RenderResult::Error`] by [`Self::resolve`] and nothing is retried.
#[derive(Clone)]
pub struct EmbedService {
    provider: Arc<dyn EmbedProvider>,
}

impl EmbedService {
    /// Creates a new embed service backed by `provider`.
    pub fn new(provider: Arc<dyn EmbedProvider>) -> Self {
        Self { provider }
    }

    /// Resolves raw input end to end.
    ///
    /// - `@handle` → [`RenderResult::ProfileHint`], no network call
    /// - anything else → [`Self::resolve_post`], errors folded into
    ///   [`RenderResult::Error`]
    pub async fn resolve(&self, raw: &str) -> RenderResult {
        self.try_resolve(raw).await.unwrap_or_else(RenderResult::from)
    }

    /// Same as [`Self::resolve`] but keeps the error kind.
    ///
    /// Used by the web layer, where the error renders its own page. The
    /// `Ok` value is never [`RenderResult::Error`].
    ///
    /// # Errors
    ///
    /// See [`Self::resolve_post`].
    pub async fn try_resolve(&self, raw: &str) -> Result<RenderResult, EmbedError> {
        let result = match classify(raw) {
            ClassifiedInput::Profile { handle } => Ok(self.render_profile(&handle)),
            ClassifiedInput::PostUrlCandidate { url } => self.resolve_post(&url).await,
        };

        match &result {
            Ok(rendered) => info!(kind = rendered.kind(), "Embed resolved"),
            Err(e) => warn!(error = %e, "Embed resolution failed"),
        }

        result
    }

    /// Builds the profile hint for a handle that includes its leading `@`.
    pub fn render_profile(&self, handle: &str) -> RenderResult {
        RenderResult::ProfileHint {
            display_url: profile_url(handle),
        }
    }

    /// Fetches embed markup for a post URL.
    ///
    /// # Errors
    ///
    /// - [`EmbedError::InvalidInput`] if `url` does not start with `http(s)://`
    ///   (the provider is not called)
    /// - [`EmbedError::UpstreamStatus`] / [`EmbedError::Unexpected`] from the provider
    /// - [`EmbedError::MissingHtml`] if the answer has no usable `html`
    pub async fn resolve_post(&self, url: &str) -> Result<RenderResult, EmbedError> {
        if !is_post_url(url) {
            return Err(EmbedError::InvalidInput);
        }

        let response = self.provider.fetch(url).await?;

        let embed_html = response.embed_html().ok_or(EmbedError::MissingHtml)?;

        Ok(RenderResult::PostEmbed {
            display_url: url.to_string(),
            embed_html: embed_html.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::oembed::OEmbedResponse;
    use crate::domain::providers::MockEmbedProvider;

    const POST_URL: &str = "https://www.tiktok.com/@u/video/123";

    fn service(mock: MockEmbedProvider) -> EmbedService {
        EmbedService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_profile_never_calls_provider() {
        let mut mock = MockEmbedProvider::new();
        mock.expect_fetch().times(0);

        let result = service(mock).resolve("  @someuser  ").await;

        assert_eq!(
            result,
            RenderResult::ProfileHint {
                display_url: "https://www.tiktok.com/@someuser".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_scheme_never_calls_provider() {
        let mut mock = MockEmbedProvider::new();
        mock.expect_fetch().times(0);
        let service = service(mock);

        for input in ["ftp://example.com/post", "tiktok.com/@u/video/1", "", "   "] {
            let result = service.resolve(input).await;
            assert_eq!(
                result,
                RenderResult::Error {
                    message: "Please paste a full TikTok post URL (or @username).".to_string()
                },
                "input: {input:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_post_embed_success() {
        let mut mock = MockEmbedProvider::new();
        mock.expect_fetch()
            .withf(|url| url == POST_URL)
            .times(1)
            .returning(|_| {
                Ok(OEmbedResponse {
                    html: Some("<blockquote>...</blockquote>".to_string()),
                })
            });

        let result = service(mock).resolve(&format!("  {POST_URL} ")).await;

        assert_eq!(
            result,
            RenderResult::PostEmbed {
                display_url: POST_URL.to_string(),
                embed_html: "<blockquote>...</blockquote>".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_uppercase_scheme_is_forwarded() {
        let mut mock = MockEmbedProvider::new();
        mock.expect_fetch().times(1).returning(|_| {
            Ok(OEmbedResponse {
                html: Some("<blockquote/>".to_string()),
            })
        });

        let result = service(mock).resolve("HTTPS://www.tiktok.com/@u/video/1").await;

        assert_eq!(result.kind(), "post");
    }

    #[tokio::test]
    async fn test_upstream_404() {
        let mut mock = MockEmbedProvider::new();
        mock.expect_fetch()
            .times(1)
            .returning(|_| Err(EmbedError::UpstreamStatus(404)));

        let result = service(mock).resolve(POST_URL).await;

        match result {
            RenderResult::Error { message } => assert!(message.contains("HTTP 404")),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_html() {
        let mut mock = MockEmbedProvider::new();
        mock.expect_fetch()
            .times(1)
            .returning(|_| Ok(OEmbedResponse::default()));

        let result = service(mock).resolve(POST_URL).await;

        assert_eq!(
            result,
            RenderResult::Error {
                message: "Could not render embed code for this URL.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_empty_html_is_missing() {
        let mut mock = MockEmbedProvider::new();
        mock.expect_fetch().times(1).returning(|_| {
            Ok(OEmbedResponse {
                html: Some(String::new()),
            })
        });

        let err = service(mock).resolve_post(POST_URL).await.unwrap_err();

        assert_eq!(err, EmbedError::MissingHtml);
    }

    #[tokio::test]
    async fn test_unexpected_error() {
        let mut mock = MockEmbedProvider::new();
        mock.expect_fetch()
            .times(1)
            .returning(|_| Err(EmbedError::Unexpected("operation timed out".to_string())));

        let result = service(mock).resolve(POST_URL).await;

        assert_eq!(
            result,
            RenderResult::Error {
                message: "Unexpected error: operation timed out".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_try_resolve_keeps_error_kind() {
        let mut mock = MockEmbedProvider::new();
        mock.expect_fetch()
            .times(1)
            .returning(|_| Err(EmbedError::UpstreamStatus(500)));
        let service = service(mock);

        assert_eq!(
            service.try_resolve("not a url").await,
            Err(EmbedError::InvalidInput)
        );
        assert_eq!(
            service.try_resolve(POST_URL).await,
            Err(EmbedError::UpstreamStatus(500))
        );
    }

    #[test]
    fn test_render_profile() {
        let service = service(MockEmbedProvider::new());

        assert_eq!(
            service.render_profile("@a.b_c"),
            RenderResult::ProfileHint {
                display_url: "https://www.tiktok.com/@a.b_c".to_string()
            }
        );
    }
}
