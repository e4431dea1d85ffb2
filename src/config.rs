//! Configuration types for launch-tracker

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::Path, time::Duration};

/// Top-level service configuration
///
/// Every field has a default, so an empty TOML file (or no file at all)
/// yields a working configuration pointed at the public development endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// REST API listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream launch API settings
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Retry behaviour for upstream fetches
    #[serde(default)]
    pub retry: RetryConfig,
}

/// REST API configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8082)
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Enable Swagger UI at /swagger-ui (default: true)
    #[serde(default = "default_true")]
    pub swagger_ui: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            swagger_ui: true,
        }
    }
}

/// Upstream launch API configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Scheme and host of the launch API (default: https://lldev.thespacedevs.com)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// User-Agent header sent upstream
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Retry configuration for temporary upstream failures
///
/// The delay before retry `n` (1-based) is `n * base_delay`, so the worst-case
/// added latency is `base_delay * (1 + 2 + ... + (max_attempts - 1))`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Delay unit between attempts, in milliseconds (default: 1000)
    #[serde(default = "default_base_delay", with = "millis_serde")]
    pub base_delay: Duration,

    /// Total number of invocations, including the first (default: 3)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl RetryConfig {
    /// Default retry policy: 1 second base delay, 3 attempts
    pub const DEFAULT: RetryConfig = RetryConfig {
        base_delay: Duration::from_secs(1),
        max_attempts: 3,
    };
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML for [`Config`]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| Error::Config {
            message: format!("failed to parse {}: {}", path.display(), e),
            key: None,
        })
    }

    /// Check that the configuration can drive a working service
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the offending key
    pub fn validate(&self) -> Result<()> {
        if self.retry.max_attempts == 0 {
            return Err(Error::Config {
                message: "max_attempts must be at least 1".to_string(),
                key: Some("retry.max_attempts".to_string()),
            });
        }

        if self.upstream.timeout.is_zero() {
            return Err(Error::Config {
                message: "upstream timeout must be greater than zero".to_string(),
                key: Some("upstream.timeout".to_string()),
            });
        }

        let url = url::Url::parse(&self.upstream.base_url).map_err(|e| Error::Config {
            message: format!("invalid upstream base_url {:?}: {}", self.upstream.base_url, e),
            key: Some("upstream.base_url".to_string()),
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config {
                message: format!(
                    "upstream base_url must be an http(s) URL, got {:?}",
                    self.upstream.base_url
                ),
                key: Some("upstream.base_url".to_string()),
            });
        }

        Ok(())
    }
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8082))
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "https://lldev.thespacedevs.com".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    concat!("launch-tracker/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_base_delay() -> Duration {
    RetryConfig::DEFAULT.base_delay
}

fn default_max_attempts() -> u32 {
    RetryConfig::DEFAULT.max_attempts
}

// Duration serialization helper (whole seconds)
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

// Duration serialization helper (milliseconds)
mod millis_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
