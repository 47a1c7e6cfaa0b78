//! Error types for the JSON wire adapter.

use thiserror::Error;

/// Error type for wire operations.
#[derive(Error, Debug)]
pub enum WireError {
    /// JSON could not be read or written, including rejected shapes and
    /// out-of-range coordinates.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WireError {
    /// Returns true if the input was well-formed JSON with unusable content.
    #[must_use]
    pub fn is_data(&self) -> bool {
        match self {
            Self::Json(err) => err.is_data(),
        }
    }

    /// Returns true if the input was not valid JSON.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        match self {
            Self::Json(err) => err.is_syntax() || err.is_eof(),
        }
    }
}

/// Result type alias for wire operations.
pub type Result<T> = std::result::Result<T, WireError>;
