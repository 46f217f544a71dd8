//! Error types for grid access.

use thiserror::Error;

/// Result type alias using GridError.
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised by grid and cube access.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    /// A cell index fell outside the grid dimensions.
    #[error("cell ({x}, {y}) is outside a {columns}x{rows} grid")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        columns: usize,
        rows: usize,
    },

    /// A cube was queried before any z-plane was registered.
    #[error("grid cube has no z-planes")]
    EmptyCube,
}

impl GridError {
    /// Create an IndexOutOfRange error.
    pub fn index_out_of_range(x: usize, y: usize, columns: usize, rows: usize) -> Self {
        Self::IndexOutOfRange {
            x,
            y,
            columns,
            rows,
        }
    }
}
