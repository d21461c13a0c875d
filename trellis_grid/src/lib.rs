// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Grid: slot ordering and virtualization bookkeeping for a grid widget.
//!
//! [`GridContentManager`] is the single source of truth for the ordered
//! sequence of item slots and the active layout strategy. It:
//!
//! - owns the index-to-content bindings ([`ItemId`]) and every mutation of
//!   them (`insert`, `remove`, `exchange`, `move_slot`, `reload_data`,
//!   `reload_at`), failing fast with [`OutOfRange`] on bad indices;
//! - drives a full relayout whenever the count, bounds, metrics, or
//!   strategy change;
//! - answers the virtualization queries the renderer needs
//!   ([`GridContentManager::visible_range`],
//!   [`GridContentManager::hit_test`],
//!   [`GridContentManager::origin_for_index`],
//!   [`GridContentManager::scroll_offset_for`]);
//! - tracks the transient per-slot interaction flags ([`SlotFlags`]) the
//!   reorder engine sets and the presentation layer reads.
//!
//! Rendering, view recycling, and gesture recognition live in the host; the
//! manager only tells the host *which* indices to materialize and *where*
//! they go. The drag-to-reorder state machine that drives the mutation API
//! during a gesture lives in `trellis_reorder`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod manager;
mod slots;

pub use manager::{GridContentManager, OutOfRange, ScrollAlign};
pub use slots::{ItemId, Slot, SlotFlags};

// Re-exported so hosts can configure a grid without naming the layout
// crate directly.
pub use trellis_layout::{GridConfig, LayoutError, LayoutStrategy, StrategyKind, VisibleRange};
