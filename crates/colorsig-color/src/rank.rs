//! Significance ranking
//!
//! Orders the colors of a histogram by how visually prominent they are.
//! The score favors saturated, mid-to-dark and frequent colors:
//!
//! ```text
//! score = max(chroma, 1) * (1 - L / 200) * sqrt(count)
//! ```
//!
//! The `max(_, 1)` floor keeps achromatic colors rankable by lightness and
//! frequency instead of collapsing them all to zero.

use crate::colorspace::{Lab, packed_to_lab};
use colorsig_core::{Histogram, PackedColor};
use std::cmp::Ordering;

/// A histogram color together with its significance score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredColor {
    pub color: PackedColor,
    /// Pixel count in the source histogram
    pub count: u64,
    pub score: f64,
    /// Lab value the score was computed from
    pub lab: Lab,
}

impl ScoredColor {
    /// Score a single histogram entry
    pub fn new(color: PackedColor, count: u64) -> Self {
        let lab = packed_to_lab(color);
        Self {
            color,
            count,
            score: significance(&lab, count),
            lab,
        }
    }
}

/// Significance score of a color with `count` pixels
#[inline]
pub fn significance(lab: &Lab, count: u64) -> f64 {
    lab.chroma().max(1.0) * (1.0 - lab.l / 200.0) * (count as f64).sqrt()
}

/// Ordering used by [`rank_colors`]
///
/// Score descending, then pixel count descending, then packed value
/// ascending. The last two keys make the order a total function of the
/// histogram contents.
pub fn compare_significance(a: &ScoredColor, b: &ScoredColor) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.count.cmp(&a.count))
        .then_with(|| a.color.cmp(&b.color))
}

/// Rank all histogram colors by descending significance
pub fn rank_colors(histogram: &Histogram) -> Vec<ScoredColor> {
    let mut ranked: Vec<ScoredColor> = histogram
        .iter()
        .map(|(color, count)| ScoredColor::new(color, count))
        .collect();
    ranked.sort_by(compare_significance);
    ranked
}
