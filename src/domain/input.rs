//! Classification of raw visitor input.

use regex::Regex;
use std::sync::LazyLock;

/// Base URL that profile handles are appended to.
pub const TIKTOK_BASE_URL: &str = "https://www.tiktok.com/";

static POST_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("static regex is valid"));

/// What the visitor submitted, after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedInput {
    /// A profile handle including its leading `@`.
    Profile { handle: String },
    /// Anything else. Not yet validated as a URL.
    PostUrlCandidate { url: String },
}

/// Trims the input and decides which path it takes.
///
/// A leading `@` (after trimming) marks a profile handle. Everything else,
/// including the empty string, is treated as a post URL candidate and
/// validated later by [`is_post_url`].
///
/// # Examples
///
/// ```
/// use tiktok_viewer::domain::input::{ClassifiedInput, classify};
///
/// assert_eq!(
///     classify("  @someuser  "),
///     ClassifiedInput::Profile { handle: "@someuser".to_string() }
/// );
/// ```
pub fn classify(raw: &str) -> ClassifiedInput {
    let trimmed = raw.trim();

    if trimmed.starts_with('@') {
        ClassifiedInput::Profile {
            handle: trimmed.to_string(),
        }
    } else {
        ClassifiedInput::PostUrlCandidate {
            url: trimmed.to_string(),
        }
    }
}

/// Returns true if `candidate` starts with `http://` or `https://`.
///
/// The scheme is matched case-insensitively. The host is deliberately not
/// checked: any `http(s)` URL is forwarded to oEmbed, which decides whether
/// it knows the post.
pub fn is_post_url(candidate: &str) -> bool {
    POST_URL_REGEX.is_match(candidate)
}

/// Builds the public profile URL for a handle that already includes `@`.
pub fn profile_url(handle: &str) -> String {
    format!("{TIKTOK_BASE_URL}{handle}")
}
