//! Error types for streaming anomaly detection
//!
//! Provides a unified error type for all zstream crates.

use thiserror::Error;

/// Core error type for the streaming pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a constructor or configuration
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// A visualizer failed to draw or write its output
    #[error("Render error: {0}")]
    Render(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a statistic requested from an empty history
    pub fn empty_history() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a NaN/Inf observation
    pub fn non_finite(value: f64) -> Self {
        Self::InvalidInput(format!("observation {value} is not finite"))
    }

    /// Create an error for a parameter that failed validation
    pub fn invalid_parameter(name: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidParameter(format!("{name} {reason}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("window_size must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: window_size must be positive");

        let err = Error::InvalidInput("observation NaN is not finite".to_string());
        assert_eq!(err.to_string(), "Invalid input: observation NaN is not finite");

        let err = Error::InsufficientData { expected: 1, actual: 0 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 1 samples, got 0");

        let err = Error::Config("expected value at line 1 column 1".to_string());
        assert_eq!(err.to_string(), "Configuration error: expected value at line 1 column 1");

        let err = Error::Render("backend closed".to_string());
        assert_eq!(err.to_string(), "Render error: backend closed");
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::empty_history() {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::non_finite(f64::INFINITY);
        assert_eq!(err.to_string(), "Invalid input: observation inf is not finite");

        let err = Error::invalid_parameter("threshold", "must be finite, got NaN");
        assert_eq!(err.to_string(), "Invalid parameter: threshold must be finite, got NaN");
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => assert!(err.to_string().contains("file not found")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        match err {
            Error::Other(_) => assert!(err.to_string().contains("custom error message")),
            _ => panic!("Wrong error type"),
        }
    }
}
