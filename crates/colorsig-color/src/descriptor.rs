//! Color descriptor extraction
//!
//! Turns a color histogram into a fixed-length descriptor of `4 * K`
//! numbers: one `(L, a, b, weight)` quadruple per representative color,
//! heaviest first, zero-padded when fewer than K colors survive.
//!
//! The pipeline is:
//! 1. rank the histogram colors by significance ([`rank_colors`])
//! 2. greedily merge them into at most K clusters ([`merge_colors`])
//! 3. sort the clusters by pixel count and emit their Lab values and
//!    pixel shares
//!
//! [`ColorExtractor`] keeps only its configuration; all working state lives
//! inside [`ColorExtractor::extract`], so one extractor can serve any number
//! of threads.

use crate::colorspace::{Lab, lab_to_packed};
use crate::merge::{default_merge_threshold, merge_colors};
use crate::rank::rank_colors;
use crate::{ColorError, ColorResult};
use colorsig_core::{Histogram, PackedColor};
use log::debug;

/// Number of values per descriptor entry: L, a, b, weight
pub const VALUES_PER_COLOR: usize = 4;

/// Options for descriptor extraction
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorOptions {
    /// Number of representative colors K (must be at least 1)
    pub color_count: u32,
    /// CIEDE2000 distance below which colors merge; `None` uses `100 / K`
    pub merge_threshold: Option<f64>,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            color_count: 5,
            merge_threshold: None,
        }
    }
}

impl ExtractorOptions {
    /// Check the options and resolve the merge threshold
    fn resolve_threshold(&self) -> ColorResult<f64> {
        if self.color_count == 0 {
            return Err(ColorError::InvalidParameters(
                "color_count must be at least 1".to_string(),
            ));
        }
        match self.merge_threshold {
            Some(t) if !(t.is_finite() && t > 0.0) => Err(ColorError::InvalidParameters(
                format!("merge_threshold must be finite and positive, got {t}"),
            )),
            Some(t) => Ok(t),
            None => Ok(default_merge_threshold(self.color_count)),
        }
    }
}

/// One `(L, a, b, weight)` quadruple of a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DescriptorEntry {
    pub lab: Lab,
    /// Share of all histogram pixels represented by this color
    pub weight: f64,
}

impl DescriptorEntry {
    /// Whether this entry only fills an unused slot
    pub fn is_padding(&self) -> bool {
        self.weight == 0.0
    }
}

/// Fixed-length color descriptor
///
/// Values are laid out as repeating `L, a, b, weight` quadruples sorted by
/// descending weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    values: Vec<f64>,
}

impl Descriptor {
    /// An all-zero descriptor with room for `color_count` entries
    pub fn zeroed(color_count: usize) -> Self {
        Self {
            values: vec![0.0; color_count * VALUES_PER_COLOR],
        }
    }

    /// Number of entries K (including padding)
    pub fn color_count(&self) -> usize {
        self.values.len() / VALUES_PER_COLOR
    }

    /// Number of values, always `4 * K`
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Entry at `index`, or `None` past the end
    pub fn entry(&self, index: usize) -> Option<DescriptorEntry> {
        let start = index.checked_mul(VALUES_PER_COLOR)?;
        let end = start.checked_add(VALUES_PER_COLOR)?;
        let v = self.values.get(start..end)?;
        Some(DescriptorEntry {
            lab: Lab::new(v[0], v[1], v[2]),
            weight: v[3],
        })
    }

    /// All K entries in order, padding included
    pub fn entries(&self) -> impl Iterator<Item = DescriptorEntry> + '_ {
        self.values
            .chunks_exact(VALUES_PER_COLOR)
            .map(|v| DescriptorEntry {
                lab: Lab::new(v[0], v[1], v[2]),
                weight: v[3],
            })
    }

    /// Sum of all weights; 1 unless colors were dropped or the histogram
    /// was empty
    pub fn total_weight(&self) -> f64 {
        self.entries().map(|e| e.weight).sum()
    }

    /// Non-padding entries rendered back to packed RGB for display
    pub fn palette(&self) -> Vec<(PackedColor, f64)> {
        self.entries()
            .filter(|e| !e.is_padding())
            .map(|e| (lab_to_packed(e.lab), e.weight))
            .collect()
    }

    fn set_entry(&mut self, index: usize, lab: Lab, weight: f64) {
        let start = index * VALUES_PER_COLOR;
        self.values[start..start + VALUES_PER_COLOR].copy_from_slice(&[lab.l, lab.a, lab.b, weight]);
    }
}

impl AsRef<[f64]> for Descriptor {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl From<Descriptor> for Vec<f64> {
    fn from(descriptor: Descriptor) -> Self {
        descriptor.values
    }
}

/// Extracts color descriptors from histograms
///
/// # Examples
///
/// ```
/// use colorsig_color::ColorExtractor;
/// use colorsig_core::{Histogram, PackedColor};
///
/// let mut hist = Histogram::new();
/// hist.add(PackedColor::from_rgb(255, 0, 0), 100);
/// hist.add(PackedColor::from_rgb(0, 0, 255), 200);
///
/// let extractor = ColorExtractor::with_color_count(2).unwrap();
/// let descriptor = extractor.extract(&hist);
/// assert_eq!(descriptor.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorExtractor {
    options: ExtractorOptions,
    merge_threshold: f64,
}

impl ColorExtractor {
    /// Create an extractor, rejecting invalid options
    pub fn new(options: ExtractorOptions) -> ColorResult<Self> {
        let merge_threshold = options.resolve_threshold()?;
        Ok(Self {
            options,
            merge_threshold,
        })
    }

    /// Create an extractor for `color_count` colors with the default
    /// merge threshold
    pub fn with_color_count(color_count: u32) -> ColorResult<Self> {
        Self::new(ExtractorOptions {
            color_count,
            ..Default::default()
        })
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    pub fn color_count(&self) -> u32 {
        self.options.color_count
    }

    /// Effective CIEDE2000 merge threshold
    pub fn merge_threshold(&self) -> f64 {
        self.merge_threshold
    }

    /// Descriptor length, `4 * color_count`
    pub fn dimensions(&self) -> usize {
        self.options.color_count as usize * VALUES_PER_COLOR
    }

    /// Change the color count; the extractor is unchanged on error
    ///
    /// A default merge threshold follows the new count, an explicit one is
    /// kept.
    pub fn set_color_count(&mut self, color_count: u32) -> ColorResult<()> {
        let options = ExtractorOptions {
            color_count,
            ..self.options.clone()
        };
        *self = Self::new(options)?;
        Ok(())
    }

    /// Extract the descriptor of `histogram`
    ///
    /// An empty histogram yields an all-zero descriptor.
    pub fn extract(&self, histogram: &Histogram) -> Descriptor {
        let color_count = self.options.color_count as usize;
        let mut descriptor = Descriptor::zeroed(color_count);

        let total = histogram.total();
        if total == 0 {
            debug!("empty histogram, returning zero descriptor");
            return descriptor;
        }

        let ranked = rank_colors(histogram);
        let merged = merge_colors(&ranked, color_count, self.merge_threshold);
        debug!(
            "{} colors ({} px) -> {} clusters, {} colors ({} px) dropped",
            ranked.len(),
            total,
            merged.clusters.len(),
            merged.dropped_colors,
            merged.dropped_pixels
        );

        for (i, cluster) in merged.into_sorted().iter().enumerate() {
            let weight = cluster.count as f64 / total as f64;
            descriptor.set_entry(i, cluster.lab, weight);
        }

        descriptor
    }
}

impl Default for ColorExtractor {
    fn default() -> Self {
        let options = ExtractorOptions::default();
        let merge_threshold = default_merge_threshold(options.color_count);
        Self {
            options,
            merge_threshold,
        }
    }
}

/// Extract a descriptor of `color_count` colors with default options
pub fn extract_descriptor(histogram: &Histogram, color_count: u32) -> ColorResult<Descriptor> {
    Ok(ColorExtractor::with_color_count(color_count)?.extract(histogram))
}
