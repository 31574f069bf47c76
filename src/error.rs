//! Error types for the civility library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`CivilityError`] enum. Classification itself is infallible by contract;
//! errors only arise from training, configuration, and artifact handling.
//!
//! # Examples
//!
//! ```
//! use civility::error::{CivilityError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CivilityError::configuration("empty corpus"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for civility operations.
#[derive(Error, Debug)]
pub enum CivilityError {
    /// I/O errors (reading datasets, writing artifacts).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dataset schema validation errors (missing required columns).
    #[error("Schema error: {0}")]
    Schema(String),

    /// Configuration errors (empty corpus at fit time, bad parameters).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Model or vectorizer artifact missing or unreadable at load time.
    #[error("Artifact not found: {0}")]
    ArtifactNotFound(String),

    /// Dataset content errors (unreadable rows, no usable examples).
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// CSV parsing errors from the dataset loader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CivilityError.
pub type Result<T> = std::result::Result<T, CivilityError>;

impl CivilityError {
    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        CivilityError::Schema(msg.into())
    }

    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        CivilityError::Configuration(msg.into())
    }

    /// Create a new artifact-not-found error.
    pub fn artifact_not_found<S: Into<String>>(msg: S) -> Self {
        CivilityError::ArtifactNotFound(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        CivilityError::Dataset(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = CivilityError::schema("missing columns: hate, threat");
        assert_eq!(
            error.to_string(),
            "Schema error: missing columns: hate, threat"
        );

        let error = CivilityError::configuration("empty corpus");
        assert_eq!(error.to_string(), "Configuration error: empty corpus");

        let error = CivilityError::artifact_not_found("model.json");
        assert_eq!(error.to_string(), "Artifact not found: model.json");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = CivilityError::from(io_error);

        match error {
            CivilityError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
