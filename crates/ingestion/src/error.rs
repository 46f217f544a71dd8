//! Error types for the ingestion crate.

use thiserror::Error;

/// Errors that abort a load.
///
/// Structurally malformed input (a missing `NODATA_value` line, a bad
/// `cellsize`, a payload row or row count not matching the header) is not
/// an error: loaders report it as `Ok(false)`.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read grid data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid number '{token}' on line {line}")]
    InvalidNumber { token: String, line: usize },

    #[error("Malformed grid data: {0}")]
    Malformed(String),
}

impl IngestError {
    pub fn invalid_number(token: &str, line: usize) -> Self {
        Self::InvalidNumber {
            token: token.to_string(),
            line,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
