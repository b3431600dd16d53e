//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// **On Request:** a span at `INFO` level with method, URI and version.
///
/// **On Response:** an `INFO` event with status code and latency in
/// milliseconds. Latency of `POST /view` is dominated by the oEmbed call.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/view version=HTTP/1.1}: finished processing request latency=412 ms status=200
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
