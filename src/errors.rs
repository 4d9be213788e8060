//! Error types for cropdoc
//!
//! Library code returns [`PredictError`]; the binary adds context with `anyhow`.

use thiserror::Error;

/// Main error type for prediction and rendering
#[derive(Error, Debug)]
pub enum PredictError {
    /// A diagnostic record broke its non-empty invariant
    #[error("Invalid diagnostic record: {0}")]
    InvalidRecord(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors with context
    #[error("Prediction error: {0}")]
    Generic(String),
}

/// Result type alias for cropdoc operations
pub type Result<T> = std::result::Result<T, PredictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_display() {
        let err = PredictError::InvalidRecord("disease is empty".to_string());
        assert!(err.to_string().contains("disease is empty"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: PredictError = io.into();
        assert!(matches!(err, PredictError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
