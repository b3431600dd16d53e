//! Render outcomes for a single submission.

use serde::Serialize;

use crate::error::EmbedError;

/// What the result page shows.
///
/// `PostEmbed::embed_html` is never empty; empty markup is reported as
/// [`EmbedError::MissingHtml`] before this variant is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderResult {
    /// Profile link for an `@handle`. No embed is available for profiles.
    ProfileHint { display_url: String },
    /// Embed markup for a post URL.
    PostEmbed {
        display_url: String,
        embed_html: String,
    },
    /// User-facing error message.
    Error { message: String },
}

impl RenderResult {
    /// Short label used in logs and by the `resolve` CLI.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProfileHint { .. } => "profile",
            Self::PostEmbed { .. } => "post",
            Self::Error { .. } => "error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<EmbedError> for RenderResult {
    fn from(e: EmbedError) -> Self {
        Self::Error {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_embed_error_keeps_message() {
        let result = RenderResult::from(EmbedError::MissingHtml);
        assert_eq!(
            result,
            RenderResult::Error {
                message: "Could not render embed code for this URL.".to_string()
            }
        );
        assert!(result.is_error());
        assert_eq!(result.kind(), "error");
    }

    #[test]
    fn test_kind_labels() {
        let profile = RenderResult::ProfileHint {
            display_url: "https://www.tiktok.com/@a".to_string(),
        };
        let post = RenderResult::PostEmbed {
            display_url: "https://www.tiktok.com/@a/video/1".to_string(),
            embed_html: "<blockquote></blockquote>".to_string(),
        };

        assert_eq!(profile.kind(), "profile");
        assert_eq!(post.kind(), "post");
        assert!(!post.is_error());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let profile = RenderResult::ProfileHint {
            display_url: "https://www.tiktok.com/@a".to_string(),
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["kind"], "profile_hint");
        assert_eq!(json["display_url"], "https://www.tiktok.com/@a");
    }
}
