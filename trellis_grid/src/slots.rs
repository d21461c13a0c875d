// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot bookkeeping: the index-to-content binding and its transient flags.

/// Opaque identity of the content bound to a slot.
///
/// The manager assigns a fresh id when a slot is created (`reload_data`,
/// `insert`, `reload_at`) and carries it along through `exchange` and
/// `move_slot`, so the host can keep its rendered views keyed by `ItemId`
/// while indices shift underneath them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemId(pub(crate) u64);

impl ItemId {
    /// The raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

bitflags::bitflags! {
    /// Transient interaction state for one slot.
    ///
    /// Set and cleared by the reorder engine; the presentation layer reads
    /// them to drive press/drag visuals. Never persisted.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SlotFlags: u8 {
        /// The slot is under an active press that has not yet become a drag.
        const PRESSED = 0b0000_0001;
        /// The slot's item is being dragged to a new position.
        const DRAGGED = 0b0000_0010;
    }
}

/// One entry in the manager's ordered slot sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// The content bound to this index.
    pub item: ItemId,
    /// Transient interaction flags.
    pub flags: SlotFlags,
}

impl Slot {
    pub(crate) const fn new(item: ItemId) -> Self {
        Self {
            item,
            flags: SlotFlags::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemId, Slot, SlotFlags};

    #[test]
    fn new_slots_carry_no_transient_state() {
        let slot = Slot::new(ItemId(7));
        assert_eq!(slot.item.raw(), 7);
        assert!(slot.flags.is_empty());
    }

    #[test]
    fn flags_compose() {
        let mut flags = SlotFlags::PRESSED;
        flags |= SlotFlags::DRAGGED;
        assert!(flags.contains(SlotFlags::PRESSED | SlotFlags::DRAGGED));
        flags.remove(SlotFlags::PRESSED);
        assert_eq!(flags, SlotFlags::DRAGGED);
    }
}
