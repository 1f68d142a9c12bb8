//! colorsig Color - Perceptual color descriptors
//!
//! This crate turns a color histogram into a compact descriptor of the
//! image's dominant colors:
//!
//! - **Color space conversion** ([`colorspace`]): RGB <-> linear sRGB,
//!   XYZ, LAB
//! - **Color difference** ([`difference`]): CIEDE2000
//! - **Significance ranking** ([`rank`]): orders colors by visual
//!   prominence
//! - **Perceptual merging** ([`merge`]): greedy CIEDE2000 clustering
//! - **Descriptor extraction** ([`descriptor`]): the `(L, a, b, weight)`
//!   descriptor and its extractor

pub mod colorspace;
pub mod descriptor;
pub mod difference;
pub mod error;
pub mod merge;
pub mod rank;

// Re-export core types
pub use colorsig_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    // Types
    Lab,
    LinearRgb,
    Xyz,
    // Conversions
    lab_to_packed,
    lab_to_rgb,
    lab_to_xyz,
    linear_to_srgb,
    linear_to_xyz,
    packed_to_lab,
    rgb_to_lab,
    rgb_to_xyz,
    srgb_to_linear,
    xyz_to_lab,
    xyz_to_linear,
    xyz_to_rgb,
};

pub use difference::ciede2000;

// Re-export ranking and merging
pub use merge::{Cluster, MergedColors, default_merge_threshold, merge_colors};
pub use rank::{ScoredColor, rank_colors, significance};

// Re-export descriptor extraction
pub use descriptor::{
    // Types
    ColorExtractor,
    Descriptor,
    DescriptorEntry,
    ExtractorOptions,
    // Functions
    extract_descriptor,
};
