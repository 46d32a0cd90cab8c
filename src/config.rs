//! Client configuration for the Statefold service.

use crate::error::{Error, Result};

/// Default endpoint for the hosted Statefold service.
pub const DEFAULT_ENDPOINT: &str = "https://api.statefold.dev";

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "STATEFOLD_TOKEN";

/// Environment variable overriding the service endpoint.
pub const ENDPOINT_ENV: &str = "STATEFOLD_ENDPOINT";

/// Configuration for the Statefold service client.
///
/// # Examples
///
/// ```
/// use statefold_sdk::ClientConfig;
///
/// let config = ClientConfig::with_token("sf_live_abc123")
///     .with_endpoint("http://localhost:8090");
/// assert_eq!(config.endpoint, "http://localhost:8090");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service
    pub endpoint: String,
    /// API token used as the bearer credential; required to build a client
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
        }
    }
}

impl ClientConfig {
    /// Creates a new ClientConfig with the given API token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Replaces the service endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Creates a new ClientConfig from the process environment.
    ///
    /// Reads the token from `STATEFOLD_TOKEN` and an optional endpoint
    /// override from `STATEFOLD_ENDPOINT`. A missing token is reported
    /// when the client is built, not here.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            config.endpoint = endpoint;
        }
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            config.token = Some(token);
        }
        config
    }

    pub(crate) fn require_token(&self) -> Result<&str> {
        self.token.as_deref().ok_or_else(|| {
            Error::config(format!(
                "API token is not set; use ClientConfig::with_token or set {TOKEN_ENV}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.token.is_none());
        assert!(config.require_token().is_err());
    }

    #[test]
    fn test_with_token_and_endpoint() {
        let config = ClientConfig::with_token("tok").with_endpoint("http://localhost:8090");
        assert_eq!(config.require_token().unwrap(), "tok");
        assert_eq!(config.endpoint, "http://localhost:8090");
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(TOKEN_ENV, "env-token");
        std::env::set_var(ENDPOINT_ENV, "http://localhost:9999");

        let config = ClientConfig::from_env();
        assert_eq!(config.token.as_deref(), Some("env-token"));
        assert_eq!(config.endpoint, "http://localhost:9999");

        std::env::remove_var(TOKEN_ENV);
        std::env::remove_var(ENDPOINT_ENV);
    }
}
