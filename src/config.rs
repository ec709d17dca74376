//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is read first if present.
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"
//! export PAGEVIEWS_API_BASE_URL="https://wikimedia.org/api/rest_v1/metrics/pageviews/top/en.wikipedia/all-access"
//! export FETCH_CONCURRENCY="8"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PAGEVIEWS_API_BASE_URL` - Upstream top-articles endpoint (default: Wikimedia, en.wikipedia, all-access)
//! - `PAGEVIEWS_USER_AGENT` - `User-Agent` sent upstream (default: desktop Chrome)
//! - `UPSTREAM_TIMEOUT_SECS` - Per-request upstream timeout (default: 30)
//! - `FETCH_CONCURRENCY` - Day fetches in flight per request (default: 8, max: 64)
//! - `MAX_RANGE_DAYS` - Longest accepted date range (default: 366)

use crate::application::services::FetchOptions;
use crate::infrastructure::upstream::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use anyhow::Result;
use std::env;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub upstream_base_url: String,
    pub upstream_user_agent: String,
    /// Timeout applied to each upstream request, in seconds.
    pub upstream_timeout_secs: u64,
    /// Maximum number of day fetches a single request keeps in flight.
    pub fetch_concurrency: usize,
    /// Longest date range, in days, a query may cover.
    pub max_range_days: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let upstream_base_url =
            env::var("PAGEVIEWS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let upstream_user_agent =
            env::var("PAGEVIEWS_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let fetch_concurrency = env::var("FETCH_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8);

        let max_range_days = env::var("MAX_RANGE_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(366);

        Self {
            listen_addr,
            log_level,
            log_format,
            upstream_base_url,
            upstream_user_agent,
            upstream_timeout_secs,
            fetch_concurrency,
            max_range_days,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `upstream_base_url` is not an `http://` or `https://` URL
    /// - `upstream_user_agent` is empty
    /// - a numeric setting is out of range
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

        if !self.upstream_base_url.starts_with("http://")
            && !self.upstream_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "PAGEVIEWS_API_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.upstream_base_url
            );
        }

        if self.upstream_user_agent.trim().is_empty() {
            anyhow::bail!("PAGEVIEWS_USER_AGENT must not be empty");
        }

        if self.upstream_timeout_secs == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECS must be greater than 0");
        }

        if self.fetch_concurrency == 0 || self.fetch_concurrency > 64 {
            anyhow::bail!(
                "FETCH_CONCURRENCY must be between 1 and 64, got {}",
                self.fetch_concurrency
            );
        }

        if self.max_range_days == 0 {
            anyhow::bail!("MAX_RANGE_DAYS must be at least 1");
        }

        Ok(())
    }

    /// Fan-out settings handed to the pageview service.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            concurrency: self.fetch_concurrency,
            max_range_days: self.max_range_days,
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Upstream: {}", self.upstream_base_url);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_secs);
        tracing::info!("  Fetch concurrency: {}", self.fetch_concurrency);
        tracing::info!("  Max range: {} days", self.max_range_days);
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
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
