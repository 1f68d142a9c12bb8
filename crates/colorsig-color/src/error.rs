//! Error types for colorsig-color

use thiserror::Error;

/// Errors that can occur during descriptor extraction
#[derive(Debug, Error)]
pub enum ColorError {
    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
