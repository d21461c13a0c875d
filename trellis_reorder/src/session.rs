// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-gesture drag session record.

use kurbo::Point;
use smallvec::SmallVec;

use crate::OrderChange;

/// State of one active drag gesture.
///
/// Created when the hold timer fires, destroyed on release or cancel. At
/// most one session exists at a time; a second press while one is active
/// is ignored by the engine.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Index the item occupied when the drag started.
    pub source_index: usize,
    /// Index the dragged item currently occupies; updated on each applied
    /// placement.
    pub current_index: usize,
    /// Live pointer location in content coordinates.
    pub drag_point: Point,
    /// Whether shake feedback is running on the dragged item.
    pub shaking: bool,
    /// Placements applied so far during this session, oldest first.
    pub applied: SmallVec<[OrderChange; 8]>,
}

impl DragSession {
    pub(crate) fn new(index: usize, drag_point: Point, shaking: bool) -> Self {
        Self {
            source_index: index,
            current_index: index,
            drag_point,
            shaking,
            applied: SmallVec::new(),
        }
    }
}
