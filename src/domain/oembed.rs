//! oEmbed response wire type.

use serde::Deserialize;

/// Body returned by `https://www.tiktok.com/oembed`.
///
/// Only `html` is consumed. TikTok sends many more fields (`title`,
/// `author_name`, `thumbnail_url`, ...), which are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OEmbedResponse {
    #[serde(default)]
    pub html: Option<String>,
}

impl OEmbedResponse {
    /// Returns the embed markup if present and non-empty.
    pub fn embed_html(&self) -> Option<&str> {
        self.html.as_deref().filter(|html| !html.is_empty())
    }
}
