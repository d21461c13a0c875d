// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paged strategies: fixed-size pages laid out side by side.
//!
//! Each page holds `rows x columns` items computed from the bounds; pages
//! sit next to one another along x and the content never scrolls
//! vertically. Hosts must enable paged/snap scrolling for these layouts;
//! the strategy only declares the requirement.

use kurbo::{Point, Rect, Size};

use crate::base::{GeometryBase, VisibleRange, cell_at};
use crate::{GridConfig, LayoutError};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// How indices advance within one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InPageOrder {
    /// Fill a row left-to-right, then move down to the next row.
    LeftToRight,
    /// Fill a column top-to-bottom, then move right to the next column.
    TopToBottom,
}

/// A paged grid: items are partitioned into viewport-sized pages.
///
/// Construct through [`LayoutStrategy::from_kind`] with
/// [`StrategyKind::PagedLtr`] or [`StrategyKind::PagedTtb`]; the two kinds
/// share this implementation and differ only in the in-page flow order.
///
/// [`LayoutStrategy::from_kind`]: crate::LayoutStrategy::from_kind
/// [`StrategyKind::PagedLtr`]: crate::StrategyKind::PagedLtr
/// [`StrategyKind::PagedTtb`]: crate::StrategyKind::PagedTtb
#[derive(Debug, Clone)]
pub struct PagedStrategy {
    base: GeometryBase,
    order: InPageOrder,
    columns: usize,
    rows: usize,
    page_count: usize,
    /// Top-left corner of cell (0, 0) within a page, after centering.
    cell_origin: Point,
}

impl PagedStrategy {
    pub(crate) const fn new(order: InPageOrder) -> Self {
        Self {
            base: GeometryBase::new(),
            order,
            columns: 1,
            rows: 1,
            page_count: 0,
            cell_origin: Point::ZERO,
        }
    }

    /// Columns per page (at least 1).
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Rows per page (at least 1).
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Capacity of one page.
    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.rows * self.columns
    }

    /// Number of pages needed for the current item count.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.page_count
    }

    /// The page under a scroll offset, clamped into the page range.
    #[must_use]
    pub fn page_for_offset(&self, scroll_offset: Point) -> usize {
        let width = self.base.bounds.width();
        if self.page_count == 0 || width <= 0.0 {
            return 0;
        }
        let page = (scroll_offset.x.max(0.0) / width).floor();
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "page is non-negative and clamped to the page count below"
        )]
        let page = page as usize;
        page.min(self.page_count - 1)
    }

    pub(crate) fn configure(&mut self, config: GridConfig) -> Result<(), LayoutError> {
        config.validate()?;
        self.base.config = config;
        Ok(())
    }

    pub(crate) fn rebase(&mut self, item_count: usize, bounds: Rect) {
        let base = &mut self.base;
        base.item_count = item_count;
        base.bounds = bounds;

        let config = base.config;
        self.columns = base.fit_count(base.avail_width(), config.item_size.width);
        self.rows = base.fit_count(base.avail_height(), config.item_size.height);
        self.page_count = item_count.div_ceil(self.rows * self.columns);

        #[allow(
            clippy::cast_precision_loss,
            reason = "per-page counts are small by construction"
        )]
        let natural_page = self.columns as f64 * base.step_x() - config.item_spacing;
        self.cell_origin = Point::new(
            base.centered_origin(config.min_edge_insets.x0, bounds.width(), natural_page),
            config.min_edge_insets.y0,
        );

        let width = if self.page_count == 0 {
            config.min_edge_insets.x0 + config.min_edge_insets.x1
        } else {
            #[allow(clippy::cast_precision_loss, reason = "page counts are small")]
            let pages_extent = self.page_count as f64 * bounds.width();
            pages_extent
        };
        base.content_size = Size::new(width, bounds.height());
    }

    pub(crate) const fn content_size(&self) -> Size {
        self.base.content_size
    }

    /// Splits an index into (page, row-in-page, column-in-page).
    fn locate(&self, index: usize) -> (usize, usize, usize) {
        let per_page = self.items_per_page();
        let (page, pos) = (index / per_page, index % per_page);
        let (row, col) = match self.order {
            InPageOrder::LeftToRight => (pos / self.columns, pos % self.columns),
            InPageOrder::TopToBottom => (pos % self.rows, pos / self.rows),
        };
        (page, row, col)
    }

    pub(crate) fn origin_for_index(&self, index: usize) -> Option<Point> {
        if index >= self.base.item_count {
            return None;
        }
        let (page, row, col) = self.locate(index);
        #[allow(clippy::cast_precision_loss, reason = "grid coordinates are small")]
        Some(Point::new(
            page as f64 * self.base.bounds.width() + self.cell_origin.x + col as f64 * self.base.step_x(),
            self.cell_origin.y + row as f64 * self.base.step_y(),
        ))
    }

    pub(crate) fn index_at_point(&self, point: Point) -> Option<usize> {
        let width = self.base.bounds.width();
        if point.x < 0.0 || width <= 0.0 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "page is non-negative and checked against the item count below"
        )]
        let page = (point.x / width).floor() as usize;
        #[allow(clippy::cast_precision_loss, reason = "page counts are small")]
        let local_x = point.x - page as f64 * width;

        let size = self.base.config.item_size;
        let col = cell_at(local_x, self.cell_origin.x, self.base.step_x(), size.width, self.columns)?;
        let row = cell_at(point.y, self.cell_origin.y, self.base.step_y(), size.height, self.rows)?;
        let pos = match self.order {
            InPageOrder::LeftToRight => row * self.columns + col,
            InPageOrder::TopToBottom => col * self.rows + row,
        };
        let index = page * self.items_per_page() + pos;
        (index < self.base.item_count).then_some(index)
    }

    pub(crate) fn visible_range(&self, scroll_offset: Point) -> VisibleRange {
        let width = self.base.bounds.width();
        if self.page_count == 0 || width <= 0.0 {
            return VisibleRange::EMPTY;
        }
        let v0 = scroll_offset.x.max(0.0);
        let v1 = scroll_offset.x + width;
        // Pages span the full viewport width, so the page containing v0
        // starts the range and the last page starting before v1 ends it.
        let first = (v0 / width).floor();
        let last = (v1 / width).ceil() - 1.0;
        if last < first {
            return VisibleRange::EMPTY;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "page indices are non-negative and clamped to the page count"
        )]
        let (first, last) = (first as usize, last as usize);
        if first >= self.page_count {
            return VisibleRange::EMPTY;
        }
        let last = last.min(self.page_count - 1);
        VisibleRange {
            start: first * self.items_per_page(),
            end: ((last + 1) * self.items_per_page()).min(self.base.item_count),
        }
    }
}
