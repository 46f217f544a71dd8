//! Error types for rendering and colour scale loading.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to read or write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid colour on line {line}: {reason}")]
    InvalidColour { line: usize, reason: String },

    #[error("Invalid style JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

impl RenderError {
    pub fn invalid_colour(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidColour {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
