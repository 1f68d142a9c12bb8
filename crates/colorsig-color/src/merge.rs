//! Perceptual merging
//!
//! Greedy single-pass clustering of ranked colors. Each color joins the
//! first accepted cluster (in acceptance order) whose representative is
//! closer than the merge threshold under CIEDE2000. A color that matches
//! nothing opens a new cluster while fewer than `limit` exist, and is
//! dropped otherwise.
//!
//! The pass is order-sensitive by construction: feed it colors sorted by
//! [`rank_colors`](crate::rank::rank_colors).

use crate::colorspace::Lab;
use crate::difference::ciede2000;
use crate::rank::ScoredColor;
use colorsig_core::PackedColor;
use log::trace;

/// A group of perceptually indistinguishable colors
///
/// The representative is the first color that opened the cluster and never
/// changes; only `count` grows as colors are absorbed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster {
    pub color: PackedColor,
    pub lab: Lab,
    pub count: u64,
}

impl Cluster {
    fn open(scored: &ScoredColor) -> Self {
        Self {
            color: scored.color,
            lab: scored.lab,
            count: scored.count,
        }
    }
}

/// Output of [`merge_colors`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedColors {
    /// Clusters in acceptance order
    pub clusters: Vec<Cluster>,
    /// Colors that matched no cluster after the limit was reached
    pub dropped_colors: usize,
    /// Pixels carried by the dropped colors
    pub dropped_pixels: u64,
}

impl MergedColors {
    /// Consume into clusters sorted by descending count
    ///
    /// The sort is stable: equal counts keep acceptance order.
    pub fn into_sorted(self) -> Vec<Cluster> {
        let mut clusters = self.clusters;
        clusters.sort_by(|a, b| b.count.cmp(&a.count));
        clusters
    }
}

/// Default merge threshold for `color_count` clusters: `100 / color_count`
///
/// Asking for more colors tightens the merge radius.
#[inline]
pub fn default_merge_threshold(color_count: u32) -> f64 {
    100.0 / color_count as f64
}

/// Greedily merge ranked colors into at most `limit` clusters
///
/// `max_delta` is exclusive: a color merges only when its CIEDE2000
/// distance to a representative is strictly below it.
pub fn merge_colors(ranked: &[ScoredColor], limit: usize, max_delta: f64) -> MergedColors {
    let mut merged = MergedColors {
        clusters: Vec::with_capacity(limit.min(ranked.len())),
        ..Default::default()
    };

    for scored in ranked {
        let accepted = merged.clusters.len();
        let target = merged
            .clusters
            .iter_mut()
            .find(|cluster| ciede2000(&scored.lab, &cluster.lab) < max_delta);

        match target {
            Some(cluster) => {
                trace!("merge {} into {}", scored.color, cluster.color);
                cluster.count += scored.count;
            }
            None if accepted < limit => {
                trace!("accept {} as cluster {}", scored.color, accepted);
                merged.clusters.push(Cluster::open(scored));
            }
            None => {
                trace!("drop {} ({} px)", scored.color, scored.count);
                merged.dropped_colors += 1;
                merged.dropped_pixels += scored.count;
            }
        }
    }

    merged
}
