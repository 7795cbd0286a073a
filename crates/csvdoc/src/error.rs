//! Error types for the csvdoc library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for csvdoc operations.
#[derive(Debug, Error)]
pub enum CsvError {
    /// A required argument was missing or empty.
    #[error("Invalid argument '{param}': {message}")]
    Argument {
        param: &'static str,
        message: String,
    },

    /// The number of row values does not match the number of headers.
    #[error("The number of headers and row values provided must match ({headers} headers, {values} values)")]
    Shape { headers: usize, values: usize },

    /// The document cannot be encoded in its current state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Byte input was not valid UTF-8.
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// No header line or data to decode.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Invalid delimiter specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CsvError {
    /// Build an [`CsvError::Argument`] for a parameter that needs at least one item.
    pub(crate) fn at_least_one(param: &'static str) -> Self {
        CsvError::Argument {
            param,
            message: "At least one item must be provided.".to_string(),
        }
    }
}

/// Result type alias for csvdoc operations.
pub type Result<T> = std::result::Result<T, CsvError>;
