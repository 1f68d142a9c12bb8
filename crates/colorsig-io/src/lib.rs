//! colorsig-io - Image decoding for colorsig
//!
//! Reads images with the `image` crate and reduces them to a
//! [`Histogram`](colorsig_core::Histogram) of packed colors, the input of
//! descriptor extraction. Every format enabled in the `image` crate's
//! default features is accepted.

mod error;
pub mod histogram;

pub use error::{IoError, IoResult};
pub use histogram::{HistogramOptions, histogram_from_image, histogram_from_memory, read_histogram};
