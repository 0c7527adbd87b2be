//! Runtime configuration.

use std::time::Duration;
use thiserror::Error;

pub use herald_std::senders::DEFAULT_API_URL;
pub use url::Url;

/// Environment variable holding the notification endpoint.
pub const API_URL_ENV: &str = "API_URL";

/// Environment variable holding the send timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "HERALD_TIMEOUT_MS";

/// Send timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The endpoint is not a valid absolute URL.
    #[error("invalid API URL `{url}`: {source}")]
    InvalidUrl {
        /// The rejected value.
        url: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The endpoint uses a scheme other than http or https.
    #[error("unsupported URL scheme `{0}`, expected http or https")]
    UnsupportedScheme(String),

    /// A zero timeout would fail every send.
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

/// Validated settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_url: Url,
    timeout: Duration,
}

impl Config {
    /// Validate raw settings.
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let parsed = Url::parse(api_url).map_err(|source| ConfigError::InvalidUrl {
            url: api_url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self {
            api_url: parsed,
            timeout,
        })
    }

    /// Destination for notification POSTs.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Upper bound on a single send.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
