//! Error types for derived grid views.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessorError {
    #[error("Column {column} is outside a grid with {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },
}

/// Result type for grid processing operations.
pub type Result<T> = std::result::Result<T, ProcessorError>;
