//! Error handling module for the jasst CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use jassc_lex::KeywordTableError;
use thiserror::Error;

/// Main error type for the jasst CLI application.
#[derive(Error, Debug)]
pub enum JasstError {
    /// Error when logging or other global setup fails.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the keyword table cannot be loaded or is invalid.
    #[error("Keyword table error: {0}")]
    Keywords(#[from] KeywordTableError),

    /// Error when a source file cannot be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadSource {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Error when writing output fails.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using JasstError.
pub type Result<T> = std::result::Result<T, JasstError>;
