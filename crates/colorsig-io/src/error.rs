//! I/O error types
//!
//! Provides a unified error type for image decoding. Decoder errors from
//! the `image` crate are mapped into `IoError` variants so that callers
//! only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not recognized or not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The decoder rejected the image data
    #[error("decode error: {0}")]
    DecodeError(String),
}

impl From<image::ImageError> for IoError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => IoError::Io(e),
            image::ImageError::Unsupported(e) => IoError::UnsupportedFormat(e.to_string()),
            other => IoError::DecodeError(other.to_string()),
        }
    }
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
