// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Layout: pluggable grid geometry for a virtualized, reorderable grid.
//!
//! This crate is the pure computation half of a grid widget: given an item
//! count, a uniform item size, spacing, and a bounding rectangle, a
//! [`LayoutStrategy`] answers
//!
//! - how large the scrollable content is ([`LayoutStrategy::content_size`]),
//! - where item `i` sits ([`LayoutStrategy::origin_for_index`]),
//! - which item (if any) is under a point ([`LayoutStrategy::index_at_point`]),
//! - and which contiguous index range intersects the viewport at a given
//!   scroll offset ([`LayoutStrategy::visible_range`]).
//!
//! Four flow patterns are provided, selected by [`StrategyKind`]:
//!
//! - [`StrategyKind::Vertical`]: rows fill left-to-right, content grows down.
//! - [`StrategyKind::Horizontal`]: columns fill top-to-bottom, content grows
//!   right.
//! - [`StrategyKind::PagedLtr`] / [`StrategyKind::PagedTtb`]: items are
//!   partitioned into viewport-sized pages laid side by side; within a page
//!   items fill left-to-right-then-down or top-to-bottom-then-right. Paged
//!   strategies report [`LayoutStrategy::requires_paging`] so the host can
//!   enable snap scrolling; this crate does not enforce it.
//!
//! Geometry misses are sentinels, not errors: a point in an inter-item gap
//! hits `None`, an out-of-range index has no origin. All derived geometry is
//! rebuilt in full by [`LayoutStrategy::rebase`]; there is no incremental
//! patching and `rebase` is idempotent.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use trellis_layout::{GridConfig, LayoutStrategy, StrategyKind};
//!
//! let mut layout = LayoutStrategy::from_kind(StrategyKind::Vertical);
//! layout.configure(GridConfig::new(Size::new(100.0, 100.0))).unwrap();
//! layout.rebase(7, Rect::new(0.0, 0.0, 320.0, 480.0));
//!
//! // Two 100px items (plus 10px spacing) fit in a 320px-wide row.
//! let origin = layout.origin_for_index(2).unwrap();
//! assert_eq!(layout.index_at_point(Point::new(origin.x + 50.0, origin.y + 50.0)), Some(2));
//!
//! // The viewport at the top of the content always sees item 0.
//! let visible = layout.visible_range(Point::ZERO);
//! assert_eq!(visible.start, 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod base;
mod config;
mod flow;
mod paged;
mod strategy;

pub use base::VisibleRange;
pub use config::{GridConfig, LayoutError, StrategyKind};
pub use flow::{HorizontalStrategy, VerticalStrategy};
pub use paged::PagedStrategy;
pub use strategy::LayoutStrategy;
