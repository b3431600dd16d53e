//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a rate limiter for the embed lookup endpoint.
///
/// Every accepted `POST /view` may trigger one outbound oEmbed request, so
/// the limiter protects both this service and TikTok from a single client.
///
/// # Arguments
///
/// - `period_seconds` - Seconds to replenish one token (`VIEW_RATE_PERIOD_SECONDS`)
/// - `burst_size` - Bucket size (`VIEW_RATE_BURST`)
///
/// Both are validated to be non-zero by [`crate::config::Config::validate`];
/// zero values fall back to 1.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/view", post(view_handler))
///     .layer(rate_limit::layer(2, 30));
/// ```
pub fn layer(
    period_seconds: u64,
    burst_size: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(period_seconds.max(1)).burst_size(burst_size.max(1));

    let governor_conf = Arc::new(
        builder
            .finish()
            .expect("non-zero period and burst always build a governor config"),
    );

    GovernorLayer::new(governor_conf)
}
