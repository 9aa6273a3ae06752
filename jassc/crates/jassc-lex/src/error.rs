//! Error types for keyword table construction.
//!
//! Scanning itself never fails. The only fallible operations in this crate
//! build or load a [`KeywordTable`](crate::KeywordTable), whose ordering
//! precondition the raw entry point trusts blindly.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for keyword table validation and loading.
#[derive(Debug, Error)]
pub enum KeywordTableError {
    /// The spelling and kind lists are not index-aligned.
    #[error("keyword table has {words} spellings but {kinds} kinds")]
    LengthMismatch {
        /// Number of spellings supplied.
        words: usize,
        /// Number of kinds supplied.
        kinds: usize,
    },

    /// A spelling is empty.
    #[error("keyword at index {index} is empty")]
    EmptyKeyword {
        /// Position of the empty spelling.
        index: usize,
    },

    /// A spelling cannot start an alphabetic run and would never be looked up.
    #[error("keyword `{keyword}` does not start with an ASCII letter")]
    NotAlphabetic {
        /// The offending spelling.
        keyword: String,
    },

    /// A spelling contains a byte that ends a word run.
    #[error("keyword `{keyword}` contains a byte outside [0-9A-Za-z_]")]
    InvalidByte {
        /// The offending spelling.
        keyword: String,
    },

    /// Spellings are not in strictly increasing byte order.
    #[error("keyword `{next}` at index {index} is not sorted after `{previous}`")]
    Unsorted {
        /// Index of the out-of-order spelling.
        index: usize,
        /// The spelling before it.
        previous: String,
        /// The out-of-order spelling.
        next: String,
    },

    /// The keyword configuration file could not be read.
    #[error("failed to read keyword table {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The keyword configuration is not valid TOML for a keyword table.
    #[error("invalid keyword table: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for keyword table operations.
pub type KeywordTableResult<T> = std::result::Result<T, KeywordTableError>;
