// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration and host capabilities.

/// Visual semantics applied when the dragged item lands on another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReorderStyle {
    /// List-move: intervening items shift by one slot toward the vacated
    /// position.
    Push,
    /// Exactly two items trade places.
    #[default]
    Swap,
}

/// Tuning knobs for the reorder engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderConfig {
    /// Placement semantics. Default [`ReorderStyle::Swap`].
    pub style: ReorderStyle,
    /// How long a press must be held before it becomes a drag, in
    /// milliseconds. `0` disables dragging entirely; presses still resolve
    /// to taps. Default 200.
    pub minimum_press_duration_ms: u64,
    /// Distance from the viewport edge within which dragging asks the host
    /// to auto-scroll, in content units. Default 50.
    pub edge_scroll_margin: f64,
    /// Start shake feedback on the dragged item. Default `true`.
    pub shake_on_drag: bool,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            style: ReorderStyle::default(),
            minimum_press_duration_ms: 200,
            edge_scroll_margin: 50.0,
            shake_on_drag: true,
        }
    }
}

/// Host capabilities, resolved once at construction.
///
/// These replace per-call "is this allowed?" callbacks: the host states up
/// front what its data layer supports, and every field defaults to the
/// permissive answer an unimplemented callback would give.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Items may be picked up and reordered. Default `true`.
    pub can_reorder: bool,
    /// Items may be deleted in editing mode. Default `true`.
    pub can_delete: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            can_reorder: true,
            can_delete: true,
        }
    }
}
