// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed strategy sum type and its factory.

use kurbo::{Point, Rect, Size};

use crate::base::VisibleRange;
use crate::flow::{HorizontalStrategy, VerticalStrategy};
use crate::paged::{InPageOrder, PagedStrategy};
use crate::{GridConfig, LayoutError, StrategyKind};

/// One of the four grid layout strategies.
///
/// A closed sum type rather than a trait object: the variant set is fixed
/// and every query dispatches with a plain `match`. Construct with
/// [`LayoutStrategy::from_kind`], then [`configure`](Self::configure) and
/// [`rebase`](Self::rebase) before querying geometry.
///
/// `configure` is a pure setter; the stored metrics take effect on the next
/// `rebase`. `rebase` rebuilds all derived geometry in full and is
/// idempotent, so queries between rebases always observe one consistent
/// snapshot.
#[derive(Debug, Clone)]
pub enum LayoutStrategy {
    /// Row-major flow, content grows downward.
    Vertical(VerticalStrategy),
    /// Column-major flow, content grows rightward.
    Horizontal(HorizontalStrategy),
    /// Side-by-side pages, left-to-right in-page order.
    PagedLtr(PagedStrategy),
    /// Side-by-side pages, top-to-bottom in-page order.
    PagedTtb(PagedStrategy),
}

impl Default for LayoutStrategy {
    fn default() -> Self {
        Self::from_kind(StrategyKind::default())
    }
}

impl LayoutStrategy {
    /// The strategy factory: maps a kind tag to a fresh strategy instance.
    #[must_use]
    pub const fn from_kind(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Vertical => Self::Vertical(VerticalStrategy::new()),
            StrategyKind::Horizontal => Self::Horizontal(HorizontalStrategy::new()),
            StrategyKind::PagedLtr => Self::PagedLtr(PagedStrategy::new(InPageOrder::LeftToRight)),
            StrategyKind::PagedTtb => Self::PagedTtb(PagedStrategy::new(InPageOrder::TopToBottom)),
        }
    }

    /// The kind tag this strategy was built from.
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Vertical(_) => StrategyKind::Vertical,
            Self::Horizontal(_) => StrategyKind::Horizontal,
            Self::PagedLtr(_) => StrategyKind::PagedLtr,
            Self::PagedTtb(_) => StrategyKind::PagedTtb,
        }
    }

    /// Returns `true` if the host scroller must snap to pages.
    #[must_use]
    pub const fn requires_paging(&self) -> bool {
        self.kind().is_paged()
    }

    /// Stores the grid metrics. Takes effect on the next [`rebase`](Self::rebase).
    pub fn configure(&mut self, config: GridConfig) -> Result<(), LayoutError> {
        match self {
            Self::Vertical(s) => s.configure(config),
            Self::Horizontal(s) => s.configure(config),
            Self::PagedLtr(s) | Self::PagedTtb(s) => s.configure(config),
        }
    }

    /// Rebuilds all derived geometry for `item_count` items inside `bounds`.
    pub fn rebase(&mut self, item_count: usize, bounds: Rect) {
        match self {
            Self::Vertical(s) => s.rebase(item_count, bounds),
            Self::Horizontal(s) => s.rebase(item_count, bounds),
            Self::PagedLtr(s) | Self::PagedTtb(s) => s.rebase(item_count, bounds),
        }
    }

    /// Size of the scrollable content for the last rebase.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        match self {
            Self::Vertical(s) => s.content_size(),
            Self::Horizontal(s) => s.content_size(),
            Self::PagedLtr(s) | Self::PagedTtb(s) => s.content_size(),
        }
    }

    /// Top-left corner of item `index`, or `None` out of range.
    #[must_use]
    pub fn origin_for_index(&self, index: usize) -> Option<Point> {
        match self {
            Self::Vertical(s) => s.origin_for_index(index),
            Self::Horizontal(s) => s.origin_for_index(index),
            Self::PagedLtr(s) | Self::PagedTtb(s) => s.origin_for_index(index),
        }
    }

    /// The item under `point`, or `None` in gaps, insets, or empty cells.
    #[must_use]
    pub fn index_at_point(&self, point: Point) -> Option<usize> {
        match self {
            Self::Vertical(s) => s.index_at_point(point),
            Self::Horizontal(s) => s.index_at_point(point),
            Self::PagedLtr(s) | Self::PagedTtb(s) => s.index_at_point(point),
        }
    }

    /// The contiguous index range whose cells overlap the viewport at
    /// `scroll_offset`. Empty (not an error) for an empty grid.
    #[must_use]
    pub fn visible_range(&self, scroll_offset: Point) -> VisibleRange {
        match self {
            Self::Vertical(s) => s.visible_range(scroll_offset),
            Self::Horizontal(s) => s.visible_range(scroll_offset),
            Self::PagedLtr(s) | Self::PagedTtb(s) => s.visible_range(scroll_offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutStrategy;
    use crate::{GridConfig, StrategyKind};
    use kurbo::{Point, Rect, Size};

    #[test]
    fn factory_round_trips_the_kind_tag() {
        for kind in [
            StrategyKind::Vertical,
            StrategyKind::Horizontal,
            StrategyKind::PagedLtr,
            StrategyKind::PagedTtb,
        ] {
            let strategy = LayoutStrategy::from_kind(kind);
            assert_eq!(strategy.kind(), kind);
            assert_eq!(strategy.requires_paging(), kind.is_paged());
        }
    }

    #[test]
    fn default_is_vertical() {
        assert_eq!(LayoutStrategy::default().kind(), StrategyKind::Vertical);
    }

    #[test]
    fn configure_rejects_bad_item_sizes_for_every_kind() {
        for kind in [
            StrategyKind::Vertical,
            StrategyKind::Horizontal,
            StrategyKind::PagedLtr,
            StrategyKind::PagedTtb,
        ] {
            let mut strategy = LayoutStrategy::from_kind(kind);
            assert!(
                strategy.configure(GridConfig::new(Size::ZERO)).is_err(),
                "{kind:?} accepted a zero item size"
            );
        }
    }

    #[test]
    fn all_kinds_satisfy_the_shared_contract() {
        let bounds = Rect::new(0.0, 0.0, 320.0, 320.0);
        for kind in [
            StrategyKind::Vertical,
            StrategyKind::Horizontal,
            StrategyKind::PagedLtr,
            StrategyKind::PagedTtb,
        ] {
            let mut strategy = LayoutStrategy::from_kind(kind);
            strategy
                .configure(GridConfig::new(Size::new(100.0, 100.0)))
                .unwrap();
            strategy.rebase(6, bounds);

            // Round trip through cell centers.
            for index in 0..6 {
                let origin = strategy.origin_for_index(index).unwrap();
                let center = Point::new(origin.x + 50.0, origin.y + 50.0);
                assert_eq!(
                    strategy.index_at_point(center),
                    Some(index),
                    "round trip failed for {kind:?} index {index}"
                );
            }

            // Out of range is a sentinel.
            assert_eq!(strategy.origin_for_index(6), None);

            // The top of the content always shows item 0.
            let visible = strategy.visible_range(Point::ZERO);
            assert!(visible.contains(0), "{kind:?} hid item 0 at the origin");

            // Rebase is idempotent.
            let content = strategy.content_size();
            strategy.rebase(6, bounds);
            assert_eq!(strategy.content_size(), content, "{kind:?} rebase drifted");
        }
    }

    #[test]
    fn empty_grids_answer_queries_without_errors() {
        for kind in [StrategyKind::Vertical, StrategyKind::PagedTtb] {
            let mut strategy = LayoutStrategy::from_kind(kind);
            strategy
                .configure(GridConfig::new(Size::new(100.0, 100.0)))
                .unwrap();
            strategy.rebase(0, Rect::new(0.0, 0.0, 320.0, 320.0));
            assert!(strategy.visible_range(Point::ZERO).is_empty());
            assert_eq!(strategy.origin_for_index(0), None);
            assert_eq!(strategy.index_at_point(Point::new(10.0, 10.0)), None);
        }
    }
}
