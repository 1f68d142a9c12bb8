//! colorsig - Perceptual color signatures for images
//!
//! Summarizes the dominant colors of an image as a fixed-length
//! descriptor of `(L, a, b, weight)` quadruples in CIE Lab space, suitable
//! for palette extraction and color-based similarity search.
//!
//! # Overview
//!
//! - [`io`]: decode an image into a color [`Histogram`]
//! - [`color`]: color space conversion, CIEDE2000, and the descriptor
//!   pipeline (significance ranking, perceptual merging)
//!
//! # Example
//!
//! ```
//! use colorsig::{Histogram, PackedColor};
//! use colorsig::color::ColorExtractor;
//!
//! let hist: Histogram = [
//!     (PackedColor::from_rgb(255, 0, 0), 100u64),
//!     (PackedColor::from_rgb(0, 0, 255), 200),
//! ]
//! .into_iter()
//! .collect();
//!
//! let descriptor = ColorExtractor::with_color_count(4).unwrap().extract(&hist);
//! assert_eq!(descriptor.len(), 16);
//! assert!((descriptor.total_weight() - 1.0).abs() < 1e-12);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use colorsig_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use colorsig_color as color;
pub use colorsig_io as io;

use colorsig_color::{ColorExtractor, Descriptor, ExtractorOptions};
use colorsig_io::HistogramOptions;
use std::path::Path;
use thiserror::Error;

/// Errors from whole-file extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The image could not be read or decoded
    #[error("image error: {0}")]
    Io(#[from] colorsig_io::IoError),

    /// The extraction options were rejected
    #[error("color error: {0}")]
    Color(#[from] colorsig_color::ColorError),
}

/// Result type for whole-file extraction
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Read an image file and extract its color descriptor
///
/// Options are validated before the file is opened.
pub fn extract_file<P: AsRef<Path>>(
    path: P,
    options: ExtractorOptions,
    histogram_options: &HistogramOptions,
) -> ExtractResult<Descriptor> {
    let extractor = ColorExtractor::new(options)?;
    let histogram = colorsig_io::read_histogram(path, histogram_options)?;
    Ok(extractor.extract(&histogram))
}
