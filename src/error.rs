//! Error types for the Textlab library.
//!
//! All errors are represented by the [`TextlabError`] enum. Validation errors
//! carry the exact human-readable message that is surfaced to callers, so
//! their `Display` output is the message itself.
//!
//! # Examples
//!
//! ```
//! use textlab::error::{TextlabError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextlabError::validation("Please enter some text to process."))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => assert_eq!(e.to_string(), "Please enter some text to process."),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Textlab operations.
#[derive(Error, Debug)]
pub enum TextlabError {
    /// Request rejected before any stage ran (blank text, no stage selected).
    #[error("{0}")]
    Validation(String),

    /// Unexpected failure inside a pipeline stage.
    #[error("Processing error: {0}")]
    Processing(String),

    /// Analysis-related errors (tokenizer or filter construction).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors (bad config file, bad bind address).
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (config files, input files, sockets)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TextlabError.
pub type Result<T> = std::result::Result<T, TextlabError>;

impl TextlabError {
    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        TextlabError::Validation(msg.into())
    }

    /// Create a new processing error.
    pub fn processing<S: Into<String>>(msg: S) -> Self {
        TextlabError::Processing(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextlabError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TextlabError::Config(msg.into())
    }

    /// Whether this error was raised by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, TextlabError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TextlabError::validation("Please select at least one processing option.");
        assert_eq!(
            error.to_string(),
            "Please select at least one processing option."
        );
        assert!(error.is_validation());

        let error = TextlabError::processing("tagger failed");
        assert_eq!(error.to_string(), "Processing error: tagger failed");
        assert!(!error.is_validation());

        let error = TextlabError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let textlab_error = TextlabError::from(io_error);

        match textlab_error {
            TextlabError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
