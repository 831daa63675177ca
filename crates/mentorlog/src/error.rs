//! Error types for mentorlog.
//!
//! The parser and the aggregation engine never fail: malformed input degrades
//! to fewer records. The errors below belong to the layers around them, which
//! read documents, load configuration and serialize reports.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for mentorlog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    /// Failed to read a history document.
    #[error("failed to read document {path}: {source}")]
    DocumentRead {
        /// Path of the document.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// No documents were given on the command line or in the configuration.
    #[error("no input documents: pass a path or set input.documents in the configuration")]
    NoDocuments,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Generic I/O failure (stdin, stdout).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing a rendered report failed.
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// A specialized Result type for mentorlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}
