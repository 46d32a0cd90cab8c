//! Error types for the Statefold SDK.

use thiserror::Error;

/// The main error type for the Statefold SDK.
///
/// Covers configuration problems, transport failures, service rejections,
/// and local serialization or filesystem failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing client configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// What is missing or malformed
        message: String,
    },

    /// Transport-level failure before an HTTP status was received.
    #[error("Transport error: {message}")]
    Http {
        /// Description of the transport failure
        message: String,
        /// Whether retrying the request may succeed
        is_retriable: bool,
    },

    /// The service rejected the request.
    #[error("Service error ({status}): {message}")]
    Api {
        /// HTTP status returned by the service
        status: u16,
        /// Service error code, when the body carried one
        code: Option<String>,
        /// Service error message
        message: String,
        /// Whether retrying the request may succeed
        is_retriable: bool,
    },

    /// The addressed deployment does not exist.
    #[error("Function not found: {message}")]
    NotFound {
        /// Service error message
        message: String,
        /// The function id that was addressed, when known
        function_id: Option<String>,
    },

    /// The service throttled the request.
    #[error("Rate limit exceeded: {message}")]
    Throttling {
        /// Service error message
        message: String,
        /// Suggested backoff, when the service provided one
        retry_after_ms: Option<u64>,
    },

    /// Serialization or deserialization failed.
    #[error("Serialization error: {message}")]
    Serde {
        /// Description of the serialization failure
        message: String,
    },

    /// Local filesystem failure (deployment record, handler source).
    #[error("I/O error: {message}")]
    Io {
        /// Description of the filesystem failure
        message: String,
    },
}

impl Error {
    /// Creates a new Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a new retriable Http error.
    pub fn http_retriable(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
            is_retriable: true,
        }
    }

    /// Creates a new Api error.
    pub fn api(status: u16, message: impl Into<String>, is_retriable: bool) -> Self {
        Self::Api {
            status,
            code: None,
            message: message.into(),
            is_retriable,
        }
    }

    /// Creates a new NotFound error for the given function id.
    pub fn not_found(message: impl Into<String>, function_id: Option<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            function_id,
        }
    }

    /// Creates a new Serde error.
    pub fn serde(message: impl Into<String>) -> Self {
        Self::Serde {
            message: message.into(),
        }
    }

    /// Creates a new Io error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Returns true if retrying the failed request may succeed.
    ///
    /// Throttling is always considered retriable; the caller decides the
    /// backoff, honoring [`Error::retry_after_ms`] when present.
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::Http { is_retriable, .. } | Self::Api { is_retriable, .. } => *is_retriable,
            Self::Throttling { .. } => true,
            _ => false,
        }
    }

    /// Returns true if the addressed deployment does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if the service throttled the request.
    pub fn is_throttling(&self) -> bool {
        matches!(self, Self::Throttling { .. })
    }

    /// Returns the suggested backoff for a throttled request, if any.
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            Self::Throttling { retry_after_ms, .. } => *retry_after_ms,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serde {
            message: error.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: error.to_string(),
            is_retriable: error.is_timeout() || error.is_connect(),
        }
    }
}

/// Result type for SDK operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let error = Error::config("token missing");
        assert!(matches!(error, Error::Config { .. }));
        assert!(!error.is_retriable());
        assert!(error.to_string().contains("token missing"));
    }

    #[test]
    fn test_http_retriable() {
        let error = Error::http_retriable("connection reset");
        assert!(error.is_retriable());
    }

    #[test]
    fn test_api_error_retriability() {
        let server_error = Error::api(500, "internal", true);
        assert!(server_error.is_retriable());

        let client_error = Error::api(400, "bad request", false);
        assert!(!client_error.is_retriable());
        assert!(client_error.to_string().contains("400"));
    }

    #[test]
    fn test_not_found() {
        let error = Error::not_found("no such function", Some("fn-1".to_string()));
        assert!(error.is_not_found());
        assert!(!error.is_retriable());
    }

    #[test]
    fn test_throttling() {
        let error = Error::Throttling {
            message: "rate exceeded".to_string(),
            retry_after_ms: Some(5000),
        };
        assert!(error.is_throttling());
        assert!(error.is_retriable());
        assert_eq!(error.retry_after_ms(), Some(5000));

        let other = Error::config("x");
        assert_eq!(other.retry_after_ms(), None);
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<String>("invalid").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Serde { .. }));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io { .. }));
    }
}
