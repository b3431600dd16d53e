//! Handler for health check endpoint.

/// Liveness check.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response
///
/// Always `200 OK` with the plain-text body `ok`. The oEmbed endpoint is not
/// contacted, so upstream outages never fail the check.
pub async fn health_handler() -> &'static str {
    "ok"
}
