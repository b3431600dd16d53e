//! Error taxonomy for embed resolution.
//!
//! Every failure on the `POST /view` path ends up as one of these variants and
//! is rendered to the visitor as an error page. The [`std::fmt::Display`] text
//! of each variant is the exact message shown to the user.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};

/// Reasons a submitted input could not be turned into an embed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmbedError {
    /// Input is neither an `@handle` nor an `http(s)://` URL.
    #[error("Please paste a full TikTok post URL (or @username).")]
    InvalidInput,

    /// The oEmbed endpoint answered with a non-2xx status.
    #[error(
        "TikTok didn't return an embed for this URL (HTTP {0}). Make sure the post is public."
    )]
    UpstreamStatus(u16),

    /// The oEmbed endpoint answered successfully but without usable `html`.
    #[error("Could not render embed code for this URL.")]
    MissingHtml,

    /// Transport, timeout or decoding failure.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for EmbedError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) if status.is_client_error() || status.is_server_error() => {
                Self::UpstreamStatus(status.as_u16())
            }
            _ => Self::Unexpected(e.to_string()),
        }
    }
}

/// Template for the error page.
///
/// Renders `templates/error.html` with a single user-facing message.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

/// Renders the error page with `200 OK`.
///
/// The failure is reported in the page body, not the status line, so
/// proxies in front of the service never replace it with their own page.
impl IntoResponse for EmbedError {
    fn into_response(self) -> Response {
        ErrorTemplate {
            message: self.to_string(),
        }
        .into_response()
    }
}
