//! Error handling module for the notebook configurator
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Catalog loading is fail-soft at the application level, so most of these
//! errors only surface through strict parsing (`validate`) and the terminal
//! loop.

use thiserror::Error;

/// Main error type for the configurator
#[derive(Error, Debug)]
pub enum ConfiguratorError {
    /// IO errors (catalog files, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog document errors (shape, invariants)
    #[error("Catalog error: {0}")]
    Catalog(String),
}

/// Result type alias for configurator operations
pub type Result<T> = std::result::Result<T, ConfiguratorError>;

impl ConfiguratorError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfiguratorError::catalog("missing products field");
        assert_eq!(err.to_string(), "Catalog error: missing products field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConfiguratorError = io_err.into();
        assert!(matches!(err, ConfiguratorError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfiguratorError = json_err.into();
        assert!(matches!(err, ConfiguratorError::Json(_)));
    }
}
