//! Handler for `robots.txt`.

/// Crawler directives.
pub const ROBOTS_TXT: &str = "User-agent: *\nDisallow: /healthz\n";

/// Serves crawler directives that keep the health check out of indexes.
///
/// # Endpoint
///
/// `GET /robots.txt`
pub async fn robots_handler() -> &'static str {
    ROBOTS_TXT
}
