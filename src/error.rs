//! Error types for fio-extract.

use std::time::Duration;
use thiserror::Error;

/// Result type for fio-extract operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for fio-extract operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No records were supplied to a batch.
    #[error("No data provided")]
    InputEmpty,

    /// The entity tagger failed for one text.
    #[error("Tagger failed: {0}")]
    Tagger(String),

    /// The entity tagger did not answer in time.
    #[error("Tagger timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV (de)serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create a tagger failure.
    pub fn tagger(msg: impl Into<String>) -> Self {
        Error::Tagger(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Whether this error came from the tagging collaborator.
    ///
    /// Collaborator failures are the only per-text errors the pipeline
    /// may degrade instead of propagating.
    #[must_use]
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, Error::Tagger(_) | Error::Timeout(_))
    }

    /// Whether this error is the client's fault (maps to a 4xx status).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InputEmpty | Error::InvalidInput(_) | Error::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::InputEmpty.to_string(), "No data provided");
        assert_eq!(
            Error::Timeout(Duration::from_millis(250)).to_string(),
            "Tagger timed out after 250ms"
        );
        assert_eq!(Error::tagger("boom").to_string(), "Tagger failed: boom");
    }

    #[test]
    fn test_classification() {
        assert!(Error::tagger("x").is_collaborator_failure());
        assert!(Error::Timeout(Duration::from_secs(1)).is_collaborator_failure());
        assert!(!Error::InputEmpty.is_collaborator_failure());

        assert!(Error::InputEmpty.is_client_error());
        assert!(Error::parse("bad json").is_client_error());
        assert!(!Error::config("missing").is_client_error());
    }
}
