//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honored (loaded by `main.rs`).
//! The outbound oEmbed timeout is fixed at 10 seconds and not configurable.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `OEMBED_ENDPOINT` - oEmbed endpoint (default: `https://www.tiktok.com/oembed`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `VIEW_RATE_PERIOD_SECONDS` - Seconds to replenish one `/view` token per client IP (default: 2)
//! - `VIEW_RATE_BURST` - `/view` burst size per client IP (default: 30)

use anyhow::Result;
use std::env;

use crate::infrastructure::oembed::DEFAULT_OEMBED_ENDPOINT;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Endpoint queried for post embeds. Overridable for staging and tests.
    pub oembed_endpoint: String,
    pub static_dir: String,
    /// Seconds needed to replenish one `/view` token for a client IP.
    pub view_rate_period_seconds: u64,
    pub view_rate_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            oembed_endpoint: DEFAULT_OEMBED_ENDPOINT.to_string(),
            static_dir: "static".to_string(),
            view_rate_period_seconds: 2,
            view_rate_burst: 30,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Currently infallible; kept fallible so required variables can be added
    /// without changing callers.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let oembed_endpoint = env::var("OEMBED_ENDPOINT").unwrap_or(defaults.oembed_endpoint);
        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        let view_rate_period_seconds = env::var("VIEW_RATE_PERIOD_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.view_rate_period_seconds);

        let view_rate_burst = env::var("VIEW_RATE_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.view_rate_burst);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            oembed_endpoint,
            static_dir,
            view_rate_period_seconds,
            view_rate_burst,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `oembed_endpoint` is not an `http(s)://` URL
    /// - either `/view` rate limit setting is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.oembed_endpoint.starts_with("http://")
            && !self.oembed_endpoint.starts_with("https://")
        {
            anyhow::bail!(
                "OEMBED_ENDPOINT must start with 'http://' or 'https://', got '{}'",
                self.oembed_endpoint
            );
        }

        if self.view_rate_period_seconds == 0 {
            anyhow::bail!("VIEW_RATE_PERIOD_SECONDS must be greater than 0");
        }
        if self.view_rate_burst == 0 {
            anyhow::bail!("VIEW_RATE_BURST must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  oEmbed endpoint: {}", self.oembed_endpoint);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!(
            "  /view rate limit: 1 token per {}s, burst {}",
            self.view_rate_period_seconds,
            self.view_rate_burst
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
