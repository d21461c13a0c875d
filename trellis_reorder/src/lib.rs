// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Reorder: the drag-to-reorder gesture engine for Trellis grids.
//!
//! [`ReorderEngine`] turns raw pointer samples into grid mutations. The
//! host feeds it presses, moves, releases, and hold-timer expirations; the
//! engine resolves them into taps, drag sessions, and placements, applying
//! each placement through the [`GridContentManager`] it is handed and
//! reporting it back as an [`OrderChange`] for the host's backing store.
//!
//! The engine keeps no clock and no timer of its own. A press that can
//! become a drag returns a deadline ([`PressOutcome::Armed`]); the host
//! schedules it and calls [`ReorderEngine::hold_expired`] when it fires.
//! Deadlines that outlive their press are inert, so the host never needs
//! to cancel a scheduled timer.
//!
//! Two placement styles are supported ([`ReorderStyle`]): `Swap` trades
//! the dragged item with the one under the pointer, `Push` list-moves it
//! there and shifts the items in between by one slot. Either way, a
//! single pointer sample applies at most one placement.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`GridContentManager`]: trellis_grid::GridContentManager

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod session;

pub use config::{Capabilities, ReorderConfig, ReorderStyle};
pub use engine::{MoveResponse, OrderChange, PressOutcome, ReleaseOutcome, ReorderEngine};
pub use session::DragSession;
