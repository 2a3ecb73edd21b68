//! Remote enhancement configuration from environment variables.

use std::env;
use std::fmt;
use std::time::Duration;

/// Upper bound on a single remote request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Default chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// An API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the raw key for the authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Remote enhancement configuration.
#[derive(Debug, Clone)]
pub struct EnhanceConfig {
    /// API key; `None` means offline.
    pub credential: Option<Credential>,
    /// Chat-completions endpoint.
    pub api_url: String,
    /// Model name sent with each request.
    pub model: String,
    /// Time bound for each request.
    pub timeout: Duration,
}

impl EnhanceConfig {
    /// Creates a configuration with default endpoint, model and timeout.
    pub fn new(credential: Option<Credential>) -> Self {
        Self {
            credential,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// An offline configuration.
    pub fn offline() -> Self {
        Self::new(None)
    }

    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `ZOOMNOTE_API_KEY`: API key (default: none, offline)
    /// - `ZOOMNOTE_API_URL`: Endpoint (default: OpenAI chat completions)
    /// - `ZOOMNOTE_MODEL`: Model name (default: "gpt-4o-mini")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let credential = lookup("ZOOMNOTE_API_KEY").map(Credential::new);

        let api_url = lookup("ZOOMNOTE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        reqwest::Url::parse(&api_url).map_err(|e| ConfigError::InvalidValue {
            name: "ZOOMNOTE_API_URL".to_string(),
            reason: e.to_string(),
        })?;

        let model = lookup("ZOOMNOTE_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            credential,
            api_url,
            model,
            timeout: REQUEST_TIMEOUT,
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = EnhanceConfig::from_lookup(lookup(&[])).unwrap();

        assert!(config.credential.is_none());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, REQUEST_TIMEOUT);
    }

    #[test]
    fn test_overrides() {
        let config = EnhanceConfig::from_lookup(lookup(&[
            ("ZOOMNOTE_API_KEY", "sk-test"),
            ("ZOOMNOTE_API_URL", "http://localhost:8080/v1/chat/completions"),
            ("ZOOMNOTE_MODEL", "local-model"),
        ]))
        .unwrap();

        assert_eq!(config.credential, Some(Credential::new("sk-test")));
        assert_eq!(config.api_url, "http://localhost:8080/v1/chat/completions");
        assert_eq!(config.model, "local-model");
    }

    #[test]
    fn test_invalid_url() {
        let err = EnhanceConfig::from_lookup(lookup(&[("ZOOMNOTE_API_URL", "not a url")]))
            .unwrap_err();
        assert!(err.to_string().contains("ZOOMNOTE_API_URL"));
    }

    #[test]
    fn credential_is_redacted() {
        let credential = Credential::new("sk-secret");
        assert_eq!(format!("{credential:?}"), "Credential(***)");
        let config = EnhanceConfig::new(Some(credential));
        assert!(!format!("{config:?}").contains("sk-secret"));
    }

    #[test]
    fn blank_credential() {
        assert!(Credential::new("  ").is_blank());
        assert!(!Credential::new("sk").is_blank());
    }
}
