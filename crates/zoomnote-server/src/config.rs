//! Server configuration from environment variables.

use std::env;

use zoomnote_enhance::EnhanceConfig;

use crate::cache::{CacheConfig, DEFAULT_MAX_AGE_SECS, DEFAULT_MAX_ENTRIES};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones.
    pub log_json: bool,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Summary cache settings.
    pub cache: CacheConfig,
    /// Remote enhancement settings.
    pub enhance: EnhanceConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: Server port (default: 3000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `LOG_FORMAT`: "json" for structured output (default: text)
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    /// - `CACHE_MAX_AGE_SECS`: Summary cache entry lifetime (default: 300)
    /// - `CACHE_MAX_ENTRIES`: Summary cache capacity (default: 1024)
    /// - `ZOOMNOTE_API_KEY`, `ZOOMNOTE_API_URL`, `ZOOMNOTE_MODEL`: see [`EnhanceConfig`]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(&lookup, "PORT", 3000)?;

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_json = lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));

        let cors_allowed_origins =
            lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_string());

        let cache = CacheConfig::new(
            parse_or(&lookup, "CACHE_MAX_AGE_SECS", DEFAULT_MAX_AGE_SECS)?,
            parse_or(&lookup, "CACHE_MAX_ENTRIES", DEFAULT_MAX_ENTRIES)?,
        );

        let enhance = EnhanceConfig::from_lookup(&lookup)?;

        Ok(Self {
            port,
            log_level,
            log_json,
            cors_allowed_origins,
            cache,
            enhance,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },

    /// Invalid remote enhancement setting.
    #[error(transparent)]
    Enhance(#[from] zoomnote_enhance::ConfigError),

    /// Invalid CORS origin.
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}
