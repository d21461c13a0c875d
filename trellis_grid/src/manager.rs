// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid content manager: single source of truth for slot ordering.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use trellis_layout::{GridConfig, LayoutError, LayoutStrategy, StrategyKind, VisibleRange};

use crate::slots::{ItemId, Slot, SlotFlags};

/// Index out of range for a mutation or flag update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The offending index.
    pub index: usize,
    /// The slot count at the time of the call.
    pub len: usize,
}

impl core::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "index {} out of range for {} slots", self.index, self.len)
    }
}

impl core::error::Error for OutOfRange {}

/// Alignment mode when computing the scroll offset for an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the start (leading edge) of the item with the viewport.
    Start,
    /// Center the item within the viewport.
    Center,
    /// Align the end (trailing edge) of the item with the viewport.
    End,
    /// Move just enough to make the item fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

/// Owner of the ordered slot sequence and the active layout strategy.
///
/// All mutations of the slot ordering go through this type; collaborating
/// layers (renderer, reorder engine) query it and never touch the sequence
/// directly. Count, bounds, strategy, and config changes each trigger a
/// full relayout; queries between two mutations always observe one
/// consistent geometry snapshot.
///
/// ```rust
/// use kurbo::{Point, Rect, Size};
/// use trellis_grid::GridContentManager;
/// use trellis_layout::{GridConfig, StrategyKind};
///
/// let config = GridConfig::new(Size::new(100.0, 100.0));
/// let mut grid = GridContentManager::new(StrategyKind::Vertical, config).unwrap();
/// grid.set_bounds(Rect::new(0.0, 0.0, 320.0, 480.0));
/// grid.reload_data(12);
///
/// // Only the slots intersecting the viewport need materialized views.
/// let visible = grid.visible_range(Point::ZERO);
/// assert_eq!(visible.start, 0);
/// assert!(visible.end < 12);
/// ```
#[derive(Debug)]
pub struct GridContentManager {
    slots: Vec<Slot>,
    layout: LayoutStrategy,
    config: GridConfig,
    bounds: Rect,
    next_item: u64,
}

impl GridContentManager {
    /// Creates an empty manager with the given strategy kind and metrics.
    pub fn new(kind: StrategyKind, config: GridConfig) -> Result<Self, LayoutError> {
        let mut layout = LayoutStrategy::from_kind(kind);
        layout.configure(config)?;
        Ok(Self {
            slots: Vec::new(),
            layout,
            config,
            bounds: Rect::ZERO,
            next_item: 0,
        })
    }

    fn fresh_item(&mut self) -> ItemId {
        let id = ItemId(self.next_item);
        self.next_item += 1;
        id
    }

    fn rebase(&mut self) {
        self.layout.rebase(self.slots.len(), self.bounds);
    }

    fn check_index(&self, index: usize) -> Result<(), OutOfRange> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(OutOfRange {
                index,
                len: self.slots.len(),
            })
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the grid holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The active layout strategy.
    #[must_use]
    pub const fn layout(&self) -> &LayoutStrategy {
        &self.layout
    }

    /// The current grid metrics.
    #[must_use]
    pub const fn config(&self) -> GridConfig {
        self.config
    }

    /// The bounding rectangle the layout works against.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replaces the grid metrics and relayouts.
    pub fn set_config(&mut self, config: GridConfig) -> Result<(), LayoutError> {
        self.layout.configure(config)?;
        self.config = config;
        self.rebase();
        Ok(())
    }

    /// Swaps in a different layout strategy and relayouts.
    ///
    /// Slot ordering and bindings are unaffected; only geometry changes.
    pub fn set_strategy(&mut self, kind: StrategyKind) -> Result<(), LayoutError> {
        let mut layout = LayoutStrategy::from_kind(kind);
        layout.configure(self.config)?;
        self.layout = layout;
        self.rebase();
        Ok(())
    }

    /// Updates the bounds and relayouts.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.rebase();
    }

    /// Discards every slot and rebinds `count` fresh items.
    pub fn reload_data(&mut self, count: usize) {
        self.slots.clear();
        for _ in 0..count {
            let item = self.fresh_item();
            self.slots.push(Slot::new(item));
        }
        self.rebase();
    }

    /// Grows or shrinks the slot sequence to `count`, keeping existing
    /// bindings; new trailing slots get fresh items.
    pub fn set_item_count(&mut self, count: usize) {
        while self.slots.len() > count {
            self.slots.pop();
        }
        while self.slots.len() < count {
            let item = self.fresh_item();
            self.slots.push(Slot::new(item));
        }
        self.rebase();
    }

    /// Inserts a fresh slot at `index`, shifting later slots up by one.
    ///
    /// `index` may equal the current count (append). Returns the new
    /// binding.
    pub fn insert(&mut self, index: usize) -> Result<ItemId, OutOfRange> {
        if index > self.slots.len() {
            return Err(OutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        let item = self.fresh_item();
        self.slots.insert(index, Slot::new(item));
        self.rebase();
        Ok(item)
    }

    /// Removes the slot at `index`, shifting later slots down by one.
    ///
    /// Returns the released binding so the renderer can recycle the view
    /// it keyed on it.
    pub fn remove(&mut self, index: usize) -> Result<ItemId, OutOfRange> {
        self.check_index(index)?;
        let slot = self.slots.remove(index);
        self.rebase();
        Ok(slot.item)
    }

    /// Rebinds the slot at `index` to a fresh item, count unchanged.
    ///
    /// Returns the new binding; the old one is released.
    pub fn reload_at(&mut self, index: usize) -> Result<ItemId, OutOfRange> {
        self.check_index(index)?;
        let item = self.fresh_item();
        self.slots[index] = Slot::new(item);
        Ok(item)
    }

    /// Swaps the bindings at `a` and `b`. Geometry is unaffected.
    pub fn exchange(&mut self, a: usize, b: usize) -> Result<(), OutOfRange> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.slots.swap(a, b);
        Ok(())
    }

    /// List-move: removes the slot at `from` and reinserts it at `to`,
    /// shifting everything between by one. Geometry is unaffected.
    pub fn move_slot(&mut self, from: usize, to: usize) -> Result<(), OutOfRange> {
        self.check_index(from)?;
        self.check_index(to)?;
        let slot = self.slots.remove(from);
        self.slots.insert(to, slot);
        Ok(())
    }

    /// The binding presented at `index`.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<ItemId> {
        self.slots.get(index).map(|slot| slot.item)
    }

    /// The transient flags of the slot at `index`.
    #[must_use]
    pub fn flags(&self, index: usize) -> Option<SlotFlags> {
        self.slots.get(index).map(|slot| slot.flags)
    }

    /// Sets or clears the pressed flag on one slot.
    pub fn set_pressed(&mut self, index: usize, pressed: bool) -> Result<(), OutOfRange> {
        self.check_index(index)?;
        self.slots[index].flags.set(SlotFlags::PRESSED, pressed);
        Ok(())
    }

    /// Sets or clears the dragged flag on one slot.
    pub fn set_dragged(&mut self, index: usize, dragged: bool) -> Result<(), OutOfRange> {
        self.check_index(index)?;
        self.slots[index].flags.set(SlotFlags::DRAGGED, dragged);
        Ok(())
    }

    /// Clears the pressed and dragged flags on every slot.
    ///
    /// Used on cancellation so no transient state survives the session.
    pub fn clear_transient_flags(&mut self) {
        for slot in &mut self.slots {
            slot.flags = SlotFlags::empty();
        }
    }

    /// Size of the scrollable content for the current layout.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.layout.content_size()
    }

    /// The contiguous index range to materialize for `scroll_offset`.
    ///
    /// This is the sole virtualization query: the renderer diffs
    /// consecutive results to create and recycle views.
    #[must_use]
    pub fn visible_range(&self, scroll_offset: Point) -> VisibleRange {
        self.layout.visible_range(scroll_offset)
    }

    /// The slot under `point` in content coordinates, or `None` for taps
    /// on empty space.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.layout.index_at_point(point)
    }

    /// Top-left corner of the slot at `index`.
    #[must_use]
    pub fn origin_for_index(&self, index: usize) -> Option<Point> {
        self.layout.origin_for_index(index)
    }

    /// The scroll offset that brings `index` into view.
    ///
    /// For paged strategies the result is the start of the item's page
    /// (pages snap; `align` does not apply). For flow strategies the item
    /// is aligned along the scroll axis per `align`, clamped so the
    /// viewport stays inside the content; the cross-axis component of
    /// `current` is preserved.
    #[must_use]
    pub fn scroll_offset_for(
        &self,
        index: usize,
        align: ScrollAlign,
        current: Point,
    ) -> Option<Point> {
        let origin = self.layout.origin_for_index(index)?;
        match &self.layout {
            LayoutStrategy::PagedLtr(s) | LayoutStrategy::PagedTtb(s) => {
                let page = index / s.items_per_page();
                #[allow(clippy::cast_precision_loss, reason = "page counts are small")]
                Some(Point::new(page as f64 * self.bounds.width(), current.y))
            }
            LayoutStrategy::Vertical(_) => {
                let offset = Self::align_on_axis(
                    align,
                    origin.y,
                    self.config.item_size.height,
                    self.bounds.height(),
                    self.content_size().height,
                    current.y,
                );
                Some(Point::new(current.x, offset))
            }
            LayoutStrategy::Horizontal(_) => {
                let offset = Self::align_on_axis(
                    align,
                    origin.x,
                    self.config.item_size.width,
                    self.bounds.width(),
                    self.content_size().width,
                    current.x,
                );
                Some(Point::new(offset, current.y))
            }
        }
    }

    fn align_on_axis(
        align: ScrollAlign,
        item_start: f64,
        item_extent: f64,
        viewport: f64,
        content: f64,
        current: f64,
    ) -> f64 {
        let item_end = item_start + item_extent;
        let target = match align {
            ScrollAlign::Start => item_start,
            ScrollAlign::End => item_end - viewport,
            ScrollAlign::Center => (item_start + item_end) / 2.0 - viewport / 2.0,
            ScrollAlign::Nearest => {
                if item_start >= current && item_end <= current + viewport {
                    current
                } else if item_start < current {
                    item_start
                } else {
                    item_end - viewport
                }
            }
        };
        target.clamp(0.0, (content - viewport).max(0.0))
    }
}
