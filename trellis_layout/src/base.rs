// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry state and axis math shared by every strategy.

use core::ops::Range;

use kurbo::{Rect, Size};

use crate::GridConfig;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Half-open range `[start, end)` of item indices intersecting a viewport.
///
/// An empty range (`start == end`) means no item is visible; it is the
/// defined result for an empty grid, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    /// First visible index (inclusive).
    pub start: usize,
    /// One past the last visible index (exclusive).
    pub end: usize,
}

impl VisibleRange {
    /// The empty range.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Returns `true` if no index is visible.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of visible indices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if `index` falls inside the range.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// The range as a standard iterator-friendly `Range`.
    #[must_use]
    pub const fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Geometry snapshot shared by all strategies.
///
/// Rebuilt in full by each strategy's `rebase`; queries between two rebases
/// always observe one consistent snapshot.
#[derive(Debug, Clone)]
pub(crate) struct GeometryBase {
    pub(crate) config: GridConfig,
    pub(crate) item_count: usize,
    pub(crate) bounds: Rect,
    pub(crate) content_size: Size,
}

impl GeometryBase {
    /// An inert base: zero items, zero bounds. Unusable for layout until
    /// `configure` has supplied a valid item size and `rebase` has run.
    pub(crate) const fn new() -> Self {
        Self {
            config: GridConfig::new(Size::ZERO),
            item_count: 0,
            bounds: Rect::ZERO,
            content_size: Size::ZERO,
        }
    }

    /// Cell stride along x: item width plus spacing.
    pub(crate) fn step_x(&self) -> f64 {
        self.config.item_size.width + self.config.item_spacing
    }

    /// Cell stride along y: item height plus spacing.
    pub(crate) fn step_y(&self) -> f64 {
        self.config.item_size.height + self.config.item_spacing
    }

    /// Bounds width with the minimum horizontal insets removed.
    pub(crate) fn avail_width(&self) -> f64 {
        let insets = self.config.min_edge_insets;
        self.bounds.width() - (insets.x0 + insets.x1)
    }

    /// Bounds height with the minimum vertical insets removed.
    pub(crate) fn avail_height(&self) -> f64 {
        let insets = self.config.min_edge_insets;
        self.bounds.height() - (insets.y0 + insets.y1)
    }

    /// How many cells of `extent` fit into `avail`, counting an exact fit
    /// and never reporting fewer than one.
    ///
    /// The trailing cell needs no spacing after it, hence the `+ spacing`
    /// in the numerator.
    pub(crate) fn fit_count(&self, avail: f64, extent: f64) -> usize {
        let step = extent + self.config.item_spacing;
        if step <= 0.0 {
            return 1;
        }
        let fit = ((avail + self.config.item_spacing) / step).floor();
        if fit < 1.0 {
            1
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "fit is a non-negative floored cell count far below usize::MAX"
            )]
            {
                fit as usize
            }
        }
    }

    /// Cross-axis start coordinate for a band of natural extent `natural`.
    ///
    /// With centering enabled, slack between `natural` and `bounds_extent`
    /// is split evenly; the minimum inset is a floor either way.
    pub(crate) fn centered_origin(&self, min_inset: f64, bounds_extent: f64, natural: f64) -> f64 {
        if self.config.center_grid {
            let pad = (bounds_extent - natural) / 2.0;
            pad.max(min_inset)
        } else {
            min_inset
        }
    }
}

/// Locates the cell index along one axis, or `None` in a gap.
///
/// Cells start at `origin` and repeat every `step`, each occupying
/// `extent` of it; coordinates in the spacing after a cell, before
/// `origin`, or at or beyond cell `count` miss.
pub(crate) fn cell_at(coord: f64, origin: f64, step: f64, extent: f64, count: usize) -> Option<usize> {
    if count == 0 || step <= 0.0 {
        return None;
    }
    let rel = coord - origin;
    if rel < 0.0 {
        return None;
    }
    let cell = (rel / step).floor();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "cell is non-negative and bounded by the count check below"
    )]
    let index = cell as usize;
    if index >= count {
        return None;
    }
    // Reject the spacing gap after the cell. The closing edge itself hits.
    if rel - cell * step > extent {
        return None;
    }
    Some(index)
}

/// Closed range of bands (rows or columns) whose cells overlap `[v0, v1)`.
///
/// Band `r` occupies `[origin + r * step, origin + r * step + extent)`;
/// overlap is strict on both sides, so a band that merely touches the
/// viewport edge is not materialized. Returns `None` when nothing overlaps.
pub(crate) fn bands_intersecting(
    v0: f64,
    v1: f64,
    origin: f64,
    step: f64,
    extent: f64,
    count: usize,
) -> Option<(usize, usize)> {
    if count == 0 || step <= 0.0 || v1 <= v0 {
        return None;
    }
    // Smallest r with origin + r * step + extent > v0.
    let first = (((v0 - origin - extent) / step).floor() + 1.0).max(0.0);
    // Largest r with origin + r * step < v1.
    let last = ((v1 - origin) / step).ceil() - 1.0;
    if last < first {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "both band indices are non-negative here and clamped into 0..count"
    )]
    let (first, last) = (first as usize, last as usize);
    let last = last.min(count - 1);
    if first > last {
        return None;
    }
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::{GeometryBase, VisibleRange, bands_intersecting, cell_at};
    use crate::GridConfig;
    use kurbo::{Rect, Size};

    fn base(bounds_w: f64, bounds_h: f64) -> GeometryBase {
        let mut base = GeometryBase::new();
        base.config = GridConfig::new(Size::new(100.0, 100.0));
        base.bounds = Rect::new(0.0, 0.0, bounds_w, bounds_h);
        base
    }

    #[test]
    fn visible_range_basics() {
        let range = VisibleRange { start: 2, end: 5 };
        assert_eq!(range.len(), 3);
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
        assert!(VisibleRange::EMPTY.is_empty());
        assert_eq!(range.indices().collect::<alloc::vec::Vec<_>>(), [2, 3, 4]);
    }

    #[test]
    fn fit_count_two_per_row_at_320() {
        // 320 wide, insets 5/5, item 100, spacing 10 -> 2 per row.
        let base = base(320.0, 480.0);
        assert_eq!(base.fit_count(base.avail_width(), 100.0), 2);
    }

    #[test]
    fn fit_count_counts_an_exact_fit() {
        // Two 100px cells plus one 10px gap occupy exactly 210px.
        let base = base(220.0, 480.0);
        assert_eq!(base.fit_count(210.0, 100.0), 2);
        // One point shy drops back to a single cell.
        assert_eq!(base.fit_count(209.0, 100.0), 1);
    }

    #[test]
    fn fit_count_never_drops_below_one() {
        let base = base(50.0, 50.0);
        assert_eq!(base.fit_count(base.avail_width(), 100.0), 1);
        assert_eq!(base.fit_count(-10.0, 100.0), 1);
    }

    #[test]
    fn centered_origin_respects_minimum_inset() {
        let base = base(320.0, 480.0);
        // Natural band of 210 in 320 bounds: slack 110, centered pad 55.
        assert_eq!(base.centered_origin(5.0, 320.0, 210.0), 55.0);
        // Natural band wider than bounds: inset floor wins.
        assert_eq!(base.centered_origin(5.0, 320.0, 330.0), 5.0);
    }

    #[test]
    fn cell_at_hits_cells_and_misses_gaps() {
        // Cells of 100 every 110, starting at 5, three of them.
        assert_eq!(cell_at(5.0, 5.0, 110.0, 100.0, 3), Some(0));
        assert_eq!(cell_at(104.9, 5.0, 110.0, 100.0, 3), Some(0));
        // Closing edge of the cell still hits.
        assert_eq!(cell_at(105.0, 5.0, 110.0, 100.0, 3), Some(0));
        // Spacing gap misses.
        assert_eq!(cell_at(110.0, 5.0, 110.0, 100.0, 3), None);
        assert_eq!(cell_at(115.0, 5.0, 110.0, 100.0, 3), Some(1));
        // Before the first cell and past the last cell miss.
        assert_eq!(cell_at(0.0, 5.0, 110.0, 100.0, 3), None);
        assert_eq!(cell_at(500.0, 5.0, 110.0, 100.0, 3), None);
    }

    #[test]
    fn bands_intersecting_clips_to_band_count() {
        // Bands of 100 every 110 starting at 5.
        assert_eq!(bands_intersecting(0.0, 480.0, 5.0, 110.0, 100.0, 10), Some((0, 4)));
        // A viewport fully inside band 1.
        assert_eq!(bands_intersecting(120.0, 200.0, 5.0, 110.0, 100.0, 10), Some((1, 1)));
        // Beyond the last band: nothing.
        assert_eq!(bands_intersecting(2000.0, 2400.0, 5.0, 110.0, 100.0, 3), None);
        // Empty strip: nothing.
        assert_eq!(bands_intersecting(0.0, 480.0, 5.0, 110.0, 100.0, 0), None);
    }

    #[test]
    fn bands_touching_the_viewport_edge_are_not_materialized() {
        // Band 0 ends exactly at 105; a viewport starting there skips it.
        assert_eq!(bands_intersecting(105.0, 300.0, 5.0, 110.0, 100.0, 10), Some((1, 2)));
        // Band 2 starts at 225; a viewport ending there skips it.
        assert_eq!(bands_intersecting(0.0, 225.0, 5.0, 110.0, 100.0, 10), Some((0, 1)));
    }
}
