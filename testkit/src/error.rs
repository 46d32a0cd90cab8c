//! Error types for the testing utilities crate.

use thiserror::Error;

/// Errors that can occur during testing.
#[derive(Debug, Error)]
pub enum TestError {
    /// The handler returned an error while applying a write.
    #[error("Handler failed applying write {index}: {source}")]
    HandlerFailed {
        /// Zero-based position of the failing write in the batch
        index: usize,
        /// The handler's error
        #[source]
        source: statefold_sdk::Error,
    },

    /// Serialization of a state snapshot failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TestError {
    /// Creates a new HandlerFailed error.
    pub fn handler_failed(index: usize, source: statefold_sdk::Error) -> Self {
        Self::HandlerFailed { index, source }
    }
}

/// Result type for testing operations.
pub type TestResult<T> = Result<T, TestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_failed_names_the_write() {
        let err = TestError::handler_failed(2, statefold_sdk::Error::serde("bad input"));
        assert!(err.to_string().contains("write 2"));
        assert!(err.to_string().contains("bad input"));
    }

    #[test]
    fn test_from_serde_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: TestError = json_err.into();
        assert!(matches!(err, TestError::Serialization(_)));
    }
}
