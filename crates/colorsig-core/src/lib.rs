//! colorsig Core - Basic color data structures
//!
//! This crate provides the value types shared by the colorsig crates:
//!
//! - [`PackedColor`] - A 24-bit `0x00RRGGBB` color with hex formatting
//! - [`Histogram`] - Pixel counts per color, the input of descriptor
//!   extraction
//!
//! Image decoding lives in `colorsig-io`; the color science in
//! `colorsig-color`.

pub mod color;
pub mod error;
pub mod histogram;

pub use color::PackedColor;
pub use error::{Error, Result};
pub use histogram::Histogram;
