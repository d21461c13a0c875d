// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reorder state machine: press, hold, drag, placement, release.

use kurbo::{Point, Vec2};
use trellis_grid::GridContentManager;

use crate::config::{Capabilities, ReorderConfig, ReorderStyle};
use crate::session::DragSession;

/// An applied change to the slot ordering.
///
/// Emitted *after* the manager's slots have been updated. The host must
/// apply the same change to its backing store synchronously, before
/// feeding the engine another pointer sample; the engine cannot detect a
/// host that falls behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderChange {
    /// Push style: the item at `from` was list-moved to `to`, shifting
    /// everything between by one slot.
    Move {
        /// Index the item vacated.
        from: usize,
        /// Index the item now occupies.
        to: usize,
    },
    /// Swap style: the items at `a` and `b` traded places.
    Exchange {
        /// One swapped index.
        a: usize,
        /// The other swapped index.
        b: usize,
    },
}

/// What a press turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The hold timer is armed; the host should call
    /// [`ReorderEngine::hold_expired`] once `deadline` passes.
    Armed {
        /// Absolute timestamp (milliseconds) at which the hold matures.
        deadline: u64,
    },
    /// The press is tracked for tap resolution only; dragging is
    /// unavailable (empty space, zero press duration, or reordering
    /// forbidden).
    TapOnly,
    /// Ignored: editing mode, or a session is already active.
    Ignored,
}

/// Per-pointer-sample output of [`ReorderEngine::pointer_moved`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveResponse {
    /// The placement applied for this sample, if any. At most one per
    /// sample, even when the pointer jumped across several cells.
    pub order_change: Option<OrderChange>,
    /// Requested auto-scroll direction and strength (each component in
    /// `[-1, 1]`), present while the pointer is inside the edge margin.
    /// The host scroll controller owns the actual scrolling.
    pub auto_scroll: Option<Vec2>,
}

/// What a release resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// An ordinary tap on the item at `index`.
    Tap {
        /// The tapped index.
        index: usize,
    },
    /// A tap that hit no item.
    TapEmptySpace,
    /// A drag session ended with the item resting at `index`.
    DragEnded {
        /// Final index of the dragged item.
        index: usize,
    },
    /// No press or session was active.
    Ignored,
}

#[derive(Debug)]
enum Phase {
    Idle,
    Pressing {
        index: Option<usize>,
        point: Point,
        deadline: Option<u64>,
    },
    Dragging(DragSession),
}

/// The interactive drag-to-reorder state machine.
///
/// The engine owns at most one [`DragSession`] and never mutates slot
/// ordering directly: every placement goes through the
/// [`GridContentManager`] passed into each call, and is reported back as
/// an [`OrderChange`] for the host's backing store. Timestamps are
/// caller-supplied milliseconds; the hold timer is a deadline the host
/// schedules and fires back via [`hold_expired`](Self::hold_expired),
/// which goes inert if the press was released first.
///
/// ```rust
/// use kurbo::{Point, Rect, Size};
/// use trellis_grid::{GridConfig, GridContentManager, StrategyKind};
/// use trellis_reorder::{PressOutcome, ReorderEngine};
///
/// let config = GridConfig::new(Size::new(100.0, 100.0));
/// let mut grid = GridContentManager::new(StrategyKind::Vertical, config).unwrap();
/// grid.set_bounds(Rect::new(0.0, 0.0, 320.0, 480.0));
/// grid.reload_data(6);
///
/// let mut engine = ReorderEngine::default();
/// let center = {
///     let origin = grid.origin_for_index(0).unwrap();
///     Point::new(origin.x + 50.0, origin.y + 50.0)
/// };
/// let PressOutcome::Armed { deadline } = engine.press(&mut grid, center, 1_000) else {
///     panic!("press on an item should arm the hold timer");
/// };
/// assert_eq!(deadline, 1_200);
/// assert_eq!(engine.hold_expired(&mut grid, deadline), Some(0));
/// ```
#[derive(Debug)]
pub struct ReorderEngine {
    config: ReorderConfig,
    caps: Capabilities,
    phase: Phase,
    editing: bool,
}

impl Default for ReorderEngine {
    fn default() -> Self {
        Self::new(ReorderConfig::default(), Capabilities::default())
    }
}

impl ReorderEngine {
    /// Creates an engine with the given tuning and host capabilities.
    #[must_use]
    pub const fn new(config: ReorderConfig, caps: Capabilities) -> Self {
        Self {
            config,
            caps,
            phase: Phase::Idle,
            editing: false,
        }
    }

    /// The engine's tuning knobs.
    #[must_use]
    pub const fn config(&self) -> ReorderConfig {
        self.config
    }

    /// The host capabilities resolved at construction.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// The active drag session, if one exists.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        match &self.phase {
            Phase::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Returns `true` in editing mode.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Enters or leaves editing mode.
    ///
    /// Entering cancels any active session; while editing, presses are
    /// ignored and [`request_delete`](Self::request_delete) becomes
    /// available.
    pub fn set_editing(&mut self, grid: &mut GridContentManager, editing: bool) {
        if editing {
            self.cancel(grid);
        }
        self.editing = editing;
    }

    /// Records a pointer-down at `point` (content coordinates).
    ///
    /// A press lands on an item or on empty space; either way it is
    /// tracked so the matching [`release`](Self::release) can resolve to
    /// a tap. The hold timer is armed only for presses on an item with
    /// dragging available.
    pub fn press(
        &mut self,
        grid: &mut GridContentManager,
        point: Point,
        timestamp: u64,
    ) -> PressOutcome {
        if self.editing || !matches!(self.phase, Phase::Idle) {
            return PressOutcome::Ignored;
        }

        let index = grid.hit_test(point);
        if let Some(index) = index
            && grid.set_pressed(index, true).is_err()
        {
            return PressOutcome::Ignored;
        }

        let drag_available = index.is_some()
            && self.config.minimum_press_duration_ms > 0
            && self.caps.can_reorder;
        let deadline = drag_available.then(|| timestamp + self.config.minimum_press_duration_ms);

        self.phase = Phase::Pressing {
            index,
            point,
            deadline,
        };
        match deadline {
            Some(deadline) => PressOutcome::Armed { deadline },
            None => PressOutcome::TapOnly,
        }
    }

    /// Fires the hold timer armed by [`press`](Self::press).
    ///
    /// Returns the index a drag session started on, or `None` if the
    /// timer is stale: the press was released or canceled first, or a
    /// newer press armed a later deadline.
    pub fn hold_expired(
        &mut self,
        grid: &mut GridContentManager,
        timestamp: u64,
    ) -> Option<usize> {
        let Phase::Pressing {
            index: Some(index),
            point,
            deadline: Some(deadline),
        } = self.phase
        else {
            return None;
        };
        if timestamp < deadline {
            return None;
        }

        if grid.set_pressed(index, false).is_err() || grid.set_dragged(index, true).is_err() {
            self.phase = Phase::Idle;
            return None;
        }
        let shaking = self.config.shake_on_drag;
        self.phase = Phase::Dragging(DragSession::new(index, point, shaking));
        Some(index)
    }

    /// Feeds a pointer-move sample while a session may be active.
    ///
    /// Outside a drag this is a no-op. During a drag, the sample is hit
    /// tested; landing on a different item applies exactly one placement
    /// (push or swap per the configured style) through the manager and
    /// reports it. `scroll_offset` locates the viewport within the
    /// content so edge proximity can request host auto-scrolling.
    pub fn pointer_moved(
        &mut self,
        grid: &mut GridContentManager,
        point: Point,
        scroll_offset: Point,
    ) -> MoveResponse {
        if !self.is_dragging() {
            return MoveResponse::default();
        }
        let auto_scroll =
            auto_scroll_hint(self.config.edge_scroll_margin, grid, point, scroll_offset);

        let Phase::Dragging(session) = &mut self.phase else {
            return MoveResponse::default();
        };
        session.drag_point = point;

        let mut order_change = None;
        if let Some(target) = grid.hit_test(point)
            && target != session.current_index
        {
            let current = session.current_index;
            let applied = match self.config.style {
                ReorderStyle::Swap => grid
                    .exchange(current, target)
                    .ok()
                    .map(|()| OrderChange::Exchange { a: current, b: target }),
                ReorderStyle::Push => grid
                    .move_slot(current, target)
                    .ok()
                    .map(|()| OrderChange::Move { from: current, to: target }),
            };
            if let Some(change) = applied {
                session.current_index = target;
                session.applied.push(change);
                order_change = Some(change);
            }
        }

        MoveResponse {
            order_change,
            auto_scroll,
        }
    }

    /// Records the pointer-up ending a press or drag.
    ///
    /// A press that never matured resolves to a tap (on an item or on
    /// empty space); a drag session ends at its current index with all
    /// transient flags cleared. An un-fired hold deadline is implicitly
    /// canceled because the press phase it belonged to is gone.
    pub fn release(&mut self, grid: &mut GridContentManager) -> ReleaseOutcome {
        match core::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => ReleaseOutcome::Ignored,
            Phase::Pressing { index: None, .. } => ReleaseOutcome::TapEmptySpace,
            Phase::Pressing {
                index: Some(index), ..
            } => {
                grid.set_pressed(index, false).ok();
                ReleaseOutcome::Tap { index }
            }
            Phase::Dragging(session) => {
                grid.set_dragged(session.current_index, false).ok();
                ReleaseOutcome::DragEnded {
                    index: session.current_index,
                }
            }
        }
    }

    /// Force-ends any press or drag without emitting further events.
    ///
    /// Safe from every state. Placements already applied stay applied;
    /// every transient slot flag is cleared. Returns the index the
    /// dragged item rests at, if a session was active.
    pub fn cancel(&mut self, grid: &mut GridContentManager) -> Option<usize> {
        let resting = match core::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging(session) => Some(session.current_index),
            _ => None,
        };
        grid.clear_transient_flags();
        resting
    }

    /// Asks whether the item at `index` should be deleted.
    ///
    /// Editing mode only, and only when the host declared
    /// [`Capabilities::can_delete`]. Returns the index to delete; the
    /// host updates its backing store, then calls
    /// [`GridContentManager::remove`].
    #[must_use]
    pub fn request_delete(&self, grid: &GridContentManager, index: usize) -> Option<usize> {
        (self.editing && self.caps.can_delete && index < grid.item_count()).then_some(index)
    }
}

/// Computes the auto-scroll request for a drag point near a viewport edge.
///
/// The strength ramps linearly from 0 at `margin` distance to 1 at the
/// edge, along the active strategy's scroll axis.
fn auto_scroll_hint(
    margin: f64,
    grid: &GridContentManager,
    point: Point,
    scroll_offset: Point,
) -> Option<Vec2> {
    if margin <= 0.0 {
        return None;
    }
    let bounds = grid.bounds();
    let vertical_axis = matches!(
        grid.layout().kind(),
        trellis_grid::StrategyKind::Vertical
    );
    let (position, viewport_start, viewport_extent) = if vertical_axis {
        (point.y, scroll_offset.y, bounds.height())
    } else {
        (point.x, scroll_offset.x, bounds.width())
    };

    let lead = position - viewport_start;
    let trail = viewport_start + viewport_extent - position;
    let strength = if lead < margin {
        -(1.0 - (lead / margin).clamp(0.0, 1.0))
    } else if trail < margin {
        1.0 - (trail / margin).clamp(0.0, 1.0)
    } else {
        return None;
    };
    Some(if vertical_axis {
        Vec2::new(0.0, strength)
    } else {
        Vec2::new(strength, 0.0)
    })
}
