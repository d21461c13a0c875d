// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flow strategies: row-major vertical and column-major horizontal grids.

use kurbo::{Point, Rect, Size};

use crate::base::{GeometryBase, VisibleRange, bands_intersecting, cell_at};
use crate::{GridConfig, LayoutError};

/// Items flow left-to-right, wrapping into rows; content grows downward.
///
/// The number of items per row is derived from the bounds width; rows of
/// items are stacked below one another and the content height is whatever
/// the item count requires. The horizontal axis never scrolls.
#[derive(Debug, Clone)]
pub struct VerticalStrategy {
    base: GeometryBase,
    items_per_row: usize,
    row_count: usize,
    /// Top-left corner of cell 0 after centering.
    grid_origin: Point,
}

impl VerticalStrategy {
    pub(crate) const fn new() -> Self {
        Self {
            base: GeometryBase::new(),
            items_per_row: 1,
            row_count: 0,
            grid_origin: Point::ZERO,
        }
    }

    /// Number of items laid out per row (at least 1).
    #[must_use]
    pub const fn items_per_row(&self) -> usize {
        self.items_per_row
    }

    /// Number of rows needed for the current item count.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
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
        self.items_per_row = base.fit_count(base.avail_width(), config.item_size.width);
        self.row_count = item_count.div_ceil(self.items_per_row);

        #[allow(
            clippy::cast_precision_loss,
            reason = "per-row counts are small by construction"
        )]
        let natural_row = self.items_per_row as f64 * base.step_x() - config.item_spacing;
        self.grid_origin = Point::new(
            base.centered_origin(config.min_edge_insets.x0, bounds.width(), natural_row),
            config.min_edge_insets.y0,
        );

        let insets_v = config.min_edge_insets.y0 + config.min_edge_insets.y1;
        let height = if self.row_count == 0 {
            insets_v
        } else {
            #[allow(clippy::cast_precision_loss, reason = "row counts are small")]
            let rows_extent = self.row_count as f64 * base.step_y() - config.item_spacing;
            insets_v + rows_extent
        };
        base.content_size = Size::new(bounds.width(), height);
    }

    pub(crate) const fn content_size(&self) -> Size {
        self.base.content_size
    }

    pub(crate) fn origin_for_index(&self, index: usize) -> Option<Point> {
        if index >= self.base.item_count {
            return None;
        }
        let (row, col) = (index / self.items_per_row, index % self.items_per_row);
        #[allow(clippy::cast_precision_loss, reason = "grid coordinates are small")]
        Some(Point::new(
            self.grid_origin.x + col as f64 * self.base.step_x(),
            self.grid_origin.y + row as f64 * self.base.step_y(),
        ))
    }

    pub(crate) fn index_at_point(&self, point: Point) -> Option<usize> {
        let size = self.base.config.item_size;
        let col = cell_at(
            point.x,
            self.grid_origin.x,
            self.base.step_x(),
            size.width,
            self.items_per_row,
        )?;
        let row = cell_at(
            point.y,
            self.grid_origin.y,
            self.base.step_y(),
            size.height,
            self.row_count,
        )?;
        let index = row * self.items_per_row + col;
        (index < self.base.item_count).then_some(index)
    }

    pub(crate) fn visible_range(&self, scroll_offset: Point) -> VisibleRange {
        let Some((first, last)) = bands_intersecting(
            scroll_offset.y,
            scroll_offset.y + self.base.bounds.height(),
            self.grid_origin.y,
            self.base.step_y(),
            self.base.config.item_size.height,
            self.row_count,
        ) else {
            return VisibleRange::EMPTY;
        };
        VisibleRange {
            start: first * self.items_per_row,
            end: ((last + 1) * self.items_per_row).min(self.base.item_count),
        }
    }
}

/// Items flow top-to-bottom, wrapping into columns; content grows rightward.
///
/// The mirror image of [`VerticalStrategy`]: the number of items per column
/// is derived from the bounds height, columns stack to the right, and the
/// vertical axis never scrolls.
#[derive(Debug, Clone)]
pub struct HorizontalStrategy {
    base: GeometryBase,
    items_per_column: usize,
    column_count: usize,
    grid_origin: Point,
}

impl HorizontalStrategy {
    pub(crate) const fn new() -> Self {
        Self {
            base: GeometryBase::new(),
            items_per_column: 1,
            column_count: 0,
            grid_origin: Point::ZERO,
        }
    }

    /// Number of items laid out per column (at least 1).
    #[must_use]
    pub const fn items_per_column(&self) -> usize {
        self.items_per_column
    }

    /// Number of columns needed for the current item count.
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.column_count
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
        self.items_per_column = base.fit_count(base.avail_height(), config.item_size.height);
        self.column_count = item_count.div_ceil(self.items_per_column);

        #[allow(
            clippy::cast_precision_loss,
            reason = "per-column counts are small by construction"
        )]
        let natural_column = self.items_per_column as f64 * base.step_y() - config.item_spacing;
        self.grid_origin = Point::new(
            config.min_edge_insets.x0,
            base.centered_origin(config.min_edge_insets.y0, bounds.height(), natural_column),
        );

        let insets_h = config.min_edge_insets.x0 + config.min_edge_insets.x1;
        let width = if self.column_count == 0 {
            insets_h
        } else {
            #[allow(clippy::cast_precision_loss, reason = "column counts are small")]
            let cols_extent = self.column_count as f64 * base.step_x() - config.item_spacing;
            insets_h + cols_extent
        };
        base.content_size = Size::new(width, bounds.height());
    }

    pub(crate) const fn content_size(&self) -> Size {
        self.base.content_size
    }

    pub(crate) fn origin_for_index(&self, index: usize) -> Option<Point> {
        if index >= self.base.item_count {
            return None;
        }
        let (col, row) = (index / self.items_per_column, index % self.items_per_column);
        #[allow(clippy::cast_precision_loss, reason = "grid coordinates are small")]
        Some(Point::new(
            self.grid_origin.x + col as f64 * self.base.step_x(),
            self.grid_origin.y + row as f64 * self.base.step_y(),
        ))
    }

    pub(crate) fn index_at_point(&self, point: Point) -> Option<usize> {
        let size = self.base.config.item_size;
        let col = cell_at(
            point.x,
            self.grid_origin.x,
            self.base.step_x(),
            size.width,
            self.column_count,
        )?;
        let row = cell_at(
            point.y,
            self.grid_origin.y,
            self.base.step_y(),
            size.height,
            self.items_per_column,
        )?;
        let index = col * self.items_per_column + row;
        (index < self.base.item_count).then_some(index)
    }

    pub(crate) fn visible_range(&self, scroll_offset: Point) -> VisibleRange {
        let Some((first, last)) = bands_intersecting(
            scroll_offset.x,
            scroll_offset.x + self.base.bounds.width(),
            self.grid_origin.x,
            self.base.step_x(),
            self.base.config.item_size.width,
            self.column_count,
        ) else {
            return VisibleRange::EMPTY;
        };
        VisibleRange {
            start: first * self.items_per_column,
            end: ((last + 1) * self.items_per_column).min(self.base.item_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HorizontalStrategy, VerticalStrategy};
    use crate::GridConfig;
    use kurbo::{Point, Rect, Size};

    fn vertical(count: usize, bounds: Rect) -> VerticalStrategy {
        let mut strategy = VerticalStrategy::new();
        strategy
            .configure(GridConfig::new(Size::new(100.0, 100.0)))
            .unwrap();
        strategy.rebase(count, bounds);
        strategy
    }

    #[test]
    fn vertical_two_per_row_in_320() {
        // 320 wide, item 100, spacing 10, insets 5: two items per row.
        let strategy = vertical(5, Rect::new(0.0, 0.0, 320.0, 480.0));
        assert_eq!(strategy.items_per_row(), 2);
        assert_eq!(strategy.row_count(), 3);

        // Index 2 starts the second row.
        let origin = strategy.origin_for_index(2).unwrap();
        let row0 = strategy.origin_for_index(0).unwrap();
        assert_eq!(origin.y, row0.y + 110.0);
        assert_eq!(origin.x, row0.x);
    }

    #[test]
    fn vertical_centering_splits_slack() {
        // Natural row: 2 * 110 - 10 = 210; slack (320 - 210) / 2 = 55.
        let strategy = vertical(4, Rect::new(0.0, 0.0, 320.0, 480.0));
        assert_eq!(strategy.origin_for_index(0).unwrap(), Point::new(55.0, 5.0));

        let mut uncentered = VerticalStrategy::new();
        let mut config = GridConfig::new(Size::new(100.0, 100.0));
        config.center_grid = false;
        uncentered.configure(config).unwrap();
        uncentered.rebase(4, Rect::new(0.0, 0.0, 320.0, 480.0));
        assert_eq!(uncentered.origin_for_index(0).unwrap(), Point::new(5.0, 5.0));
    }

    #[test]
    fn vertical_content_grows_downward_only() {
        let strategy = vertical(5, Rect::new(0.0, 0.0, 320.0, 480.0));
        let content = strategy.content_size();
        assert_eq!(content.width, 320.0);
        // Three rows: 5 + 3 * 110 - 10 + 5 = 330.
        assert_eq!(content.height, 330.0);

        let empty = vertical(0, Rect::new(0.0, 0.0, 320.0, 480.0));
        assert_eq!(empty.content_size(), Size::new(320.0, 10.0));
    }

    #[test]
    fn vertical_round_trip_through_cell_centers() {
        let strategy = vertical(7, Rect::new(0.0, 0.0, 320.0, 480.0));
        for index in 0..7 {
            let origin = strategy.origin_for_index(index).unwrap();
            let center = Point::new(origin.x + 50.0, origin.y + 50.0);
            assert_eq!(
                strategy.index_at_point(center),
                Some(index),
                "index {index} did not round-trip through its cell center"
            );
        }
    }

    #[test]
    fn vertical_misses_return_sentinels() {
        let strategy = vertical(3, Rect::new(0.0, 0.0, 320.0, 480.0));
        assert_eq!(strategy.origin_for_index(3), None);
        // Spacing gap between the two columns of row 0.
        let left = strategy.origin_for_index(0).unwrap();
        assert_eq!(strategy.index_at_point(Point::new(left.x + 105.0, left.y + 50.0)), None);
        // The empty cell after the last item in a partial row.
        let last = strategy.origin_for_index(2).unwrap();
        assert_eq!(strategy.index_at_point(Point::new(last.x + 160.0, last.y + 50.0)), None);
        // Far outside the grid.
        assert_eq!(strategy.index_at_point(Point::new(-5.0, -5.0)), None);
    }

    #[test]
    fn vertical_visible_range_tracks_scroll() {
        // 20 items, 2 per row, viewport 480 tall: rows 0..=4 at the top.
        let strategy = vertical(20, Rect::new(0.0, 0.0, 320.0, 480.0));
        let top = strategy.visible_range(Point::ZERO);
        assert_eq!((top.start, top.end), (0, 10));

        // Scrolled down one row: row 0 ends at 105 < 110, so it drops out.
        let scrolled = strategy.visible_range(Point::new(0.0, 110.0));
        assert_eq!(scrolled.start, 2);
        assert!(scrolled.end > scrolled.start);

        // The trailing partial row clips to the item count.
        let bottom = strategy.visible_range(Point::new(0.0, 700.0));
        assert_eq!(bottom.end, 20);
    }

    #[test]
    fn vertical_empty_grid_yields_empty_range() {
        let strategy = vertical(0, Rect::new(0.0, 0.0, 320.0, 480.0));
        assert!(strategy.visible_range(Point::ZERO).is_empty());
        assert_eq!(strategy.index_at_point(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn vertical_rebase_is_idempotent() {
        let bounds = Rect::new(0.0, 0.0, 320.0, 480.0);
        let mut strategy = vertical(9, bounds);
        let content = strategy.content_size();
        let origins: alloc::vec::Vec<_> = (0..9).map(|i| strategy.origin_for_index(i)).collect();

        strategy.rebase(9, bounds);
        assert_eq!(strategy.content_size(), content);
        for (index, origin) in origins.iter().enumerate() {
            assert_eq!(strategy.origin_for_index(index), *origin);
        }
    }

    fn horizontal(count: usize, bounds: Rect) -> HorizontalStrategy {
        let mut strategy = HorizontalStrategy::new();
        strategy
            .configure(GridConfig::new(Size::new(100.0, 100.0)))
            .unwrap();
        strategy.rebase(count, bounds);
        strategy
    }

    #[test]
    fn horizontal_mirrors_vertical() {
        // 320 tall: two items per column, content grows rightward.
        let strategy = horizontal(5, Rect::new(0.0, 0.0, 480.0, 320.0));
        assert_eq!(strategy.items_per_column(), 2);
        assert_eq!(strategy.column_count(), 3);

        // Index 2 starts the second column.
        let origin = strategy.origin_for_index(2).unwrap();
        let col0 = strategy.origin_for_index(0).unwrap();
        assert_eq!(origin.x, col0.x + 110.0);
        assert_eq!(origin.y, col0.y);

        let content = strategy.content_size();
        assert_eq!(content.height, 320.0);
        assert_eq!(content.width, 330.0);
    }

    #[test]
    fn horizontal_round_trip_and_visibility() {
        let strategy = horizontal(8, Rect::new(0.0, 0.0, 480.0, 320.0));
        for index in 0..8 {
            let origin = strategy.origin_for_index(index).unwrap();
            let center = Point::new(origin.x + 50.0, origin.y + 50.0);
            assert_eq!(strategy.index_at_point(center), Some(index));
        }

        let top = strategy.visible_range(Point::ZERO);
        assert_eq!(top.start, 0);
        // Viewport 480 wide shows columns 0..=4, clipped to 8 items.
        assert_eq!(top.end, 8);

        let scrolled = strategy.visible_range(Point::new(110.0, 0.0));
        assert_eq!(scrolled.start, 2);
    }
}
