//! Histogram - pixel counts per packed color
//!
//! A histogram maps each distinct [`PackedColor`] of an image to the number
//! of pixels with that color. Counts are always positive: adding a zero
//! count leaves the histogram unchanged.
//!
//! Entries are kept ordered by packed value, so iteration order depends
//! only on the contents and never on insertion order.

use crate::color::PackedColor;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Pixel counts keyed by color
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: BTreeMap<PackedColor, u64>,
    total: u64,
}

impl Histogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` pixels of `color`.
    pub fn add(&mut self, color: PackedColor, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(color).or_insert(0) += count;
        self.total += count;
    }

    /// Add a single pixel of `color`.
    #[inline]
    pub fn add_pixel(&mut self, color: PackedColor) {
        self.add(color, 1);
    }

    /// Pixel count for `color` (0 if absent).
    pub fn count(&self, color: PackedColor) -> u64 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all pixel counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate `(color, count)` pairs by ascending packed value.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    /// The `limit` most frequent colors, highest count first.
    ///
    /// Equal counts are listed by ascending packed value.
    pub fn most_used(&self, limit: usize) -> Vec<(PackedColor, u64)> {
        let mut entries: Vec<(PackedColor, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries.truncate(limit);
        entries
    }
}

/// Iterator over histogram entries
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, PackedColor, u64>,
}

impl Iterator for Iter<'_> {
    type Item = (PackedColor, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&c, &n)| (c, n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Histogram {
    type Item = (PackedColor, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(PackedColor, u64)> for Histogram {
    fn from_iter<I: IntoIterator<Item = (PackedColor, u64)>>(iter: I) -> Self {
        let mut hist = Self::new();
        hist.extend(iter);
        hist
    }
}

impl Extend<(PackedColor, u64)> for Histogram {
    fn extend<I: IntoIterator<Item = (PackedColor, u64)>>(&mut self, iter: I) {
        for (color, count) in iter {
            self.add(color, count);
        }
    }
}

impl FromIterator<PackedColor> for Histogram {
    fn from_iter<I: IntoIterator<Item = PackedColor>>(iter: I) -> Self {
        let mut hist = Self::new();
        for color in iter {
            hist.add_pixel(color);
        }
        hist
    }
}
