// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless grid host: virtualization queries + a scripted drag gesture.
//!
//! This example shows how the three crates fit together:
//! - `trellis_layout` positions items and answers geometry queries,
//! - `trellis_grid` owns the slot ordering and transient flags,
//! - `trellis_reorder` turns pointer samples into placements.
//!
//! Run:
//! - `cargo run -p trellis_demos --example grid_reorder`

use kurbo::{Point, Rect, Size};
use trellis_grid::{GridContentManager, ScrollAlign};
use trellis_layout::{GridConfig, StrategyKind};
use trellis_reorder::{
    Capabilities, PressOutcome, ReorderConfig, ReorderEngine, ReorderStyle,
};

/// The host's backing store: one label per item, kept in slot order.
struct Store {
    labels: Vec<String>,
}

impl Store {
    fn new(count: usize) -> Self {
        Self {
            labels: (0..count).map(|i| format!("item-{i}")).collect(),
        }
    }

    /// Mirrors an engine-reported placement onto the labels.
    fn apply(&mut self, change: trellis_reorder::OrderChange) {
        match change {
            trellis_reorder::OrderChange::Move { from, to } => {
                let label = self.labels.remove(from);
                self.labels.insert(to, label);
            }
            trellis_reorder::OrderChange::Exchange { a, b } => {
                self.labels.swap(a, b);
            }
        }
    }
}

fn main() {
    // A 320x480 viewport of 100px square items: two per row, centered.
    let config = GridConfig::new(Size::new(100.0, 100.0));
    let mut grid =
        GridContentManager::new(StrategyKind::Vertical, config).expect("valid item size");
    grid.set_bounds(Rect::new(0.0, 0.0, 320.0, 480.0));

    let mut store = Store::new(12);
    grid.reload_data(store.labels.len());

    println!("content size: {:?}", grid.content_size());

    // Which items should the renderer materialize at the top of the grid?
    let visible = grid.visible_range(Point::ZERO);
    println!("visible at offset 0: {visible:?}");
    for index in visible.indices() {
        let origin = grid.origin_for_index(index).expect("index is in range");
        println!("  [{index}] {:<8} @ ({:.0}, {:.0})", store.labels[index], origin.x, origin.y);
    }

    // Programmatic scrolling: center item 9 in the viewport.
    if let Some(target) = grid.scroll_offset_for(9, ScrollAlign::Center, Point::ZERO) {
        println!("scroll to center item 9: y = {:.0}", target.y);
    }

    // A scripted drag: pick up item 0, push it onto slot 3, let go.
    let reorder_config = ReorderConfig {
        style: ReorderStyle::Push,
        ..ReorderConfig::default()
    };
    let mut engine = ReorderEngine::new(reorder_config, Capabilities::default());

    let grab = cell_center(&grid, 0);
    let PressOutcome::Armed { deadline } = engine.press(&mut grid, grab, 0) else {
        panic!("press on an item should arm the hold timer");
    };
    println!("\npressed {:?}; hold matures at {deadline}ms", store.labels[0]);

    let picked = engine
        .hold_expired(&mut grid, deadline)
        .expect("deadline is current");
    println!("dragging index {picked}");

    let drop = cell_center(&grid, 3);
    let response = engine.pointer_moved(&mut grid, drop, Point::ZERO);
    if let Some(change) = response.order_change {
        store.apply(change);
        println!("applied {change:?}");
    }

    let outcome = engine.release(&mut grid);
    println!("released: {outcome:?}");
    println!("final order: {:?}", store.labels);
}

fn cell_center(grid: &GridContentManager, index: usize) -> Point {
    let origin = grid.origin_for_index(index).expect("index is in range");
    let size = grid.config().item_size;
    Point::new(origin.x + size.width / 2.0, origin.y + size.height / 2.0)
}
