//! Error types for colorsig-core
//!
//! Provides the error type shared by the core value types. Each variant
//! carries the offending input so callers can report it without extra
//! bookkeeping.

use thiserror::Error;

/// colorsig core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Integer does not fit the 24-bit `0x00RRGGBB` layout
    #[error("invalid packed color: {0:#x} exceeds 0xffffff")]
    InvalidColor(u32),

    /// Text is not a 1-6 digit hex color, optionally prefixed with `#`
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Result type alias for colorsig core operations
pub type Result<T> = std::result::Result<T, Error>;
