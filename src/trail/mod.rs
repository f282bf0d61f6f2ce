// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking.
//!
//! Every change to trailed search state is recorded as (slot, old value).
//! Rewinding to an earlier trail length replays those records in reverse,
//! restoring the state exactly as it was when that length was observed.
//! The engine stores one such length per stack entry, so backtracking into a
//! choice point is O(changes since that point).

/// A trailed location in [`crate::context::DynamicState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Size of the combinations being enumerated.
    Size,
    /// Filtered-catalog index chosen at a pick round.
    Selected(usize),
    /// Number of picked groups containing a target.
    Coverage(usize),
    /// Number of picked groups with a given primary marker.
    PrimaryUses(usize),
    /// Number of primary markers picked more than once.
    PrimaryClashes,
}

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailEntry {
    pub slot: Slot,
    pub old_value: usize,
}

#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Record the value a slot held before it is overwritten.
    pub fn record(&mut self, slot: Slot, old_value: usize) {
        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Remove the entries recorded after `checkpoint`, newest first.
    ///
    /// The caller writes each `old_value` back into its slot.
    pub fn unwind(&mut self, checkpoint: usize) -> impl Iterator<Item = TrailEntry> + '_ {
        let start = checkpoint.min(self.entries.len());
        self.entries.drain(start..).rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwind_newest_first() {
        let mut trail = Trail::new();
        trail.record(Slot::Size, 0);
        let checkpoint = trail.len();
        trail.record(Slot::Coverage(1), 0);
        trail.record(Slot::Coverage(1), 1);

        let undone: Vec<TrailEntry> = trail.unwind(checkpoint).collect();
        assert_eq!(
            undone,
            vec![
                TrailEntry { slot: Slot::Coverage(1), old_value: 1 },
                TrailEntry { slot: Slot::Coverage(1), old_value: 0 },
            ]
        );
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_unwind_past_end_is_noop() {
        let mut trail = Trail::new();
        trail.record(Slot::PrimaryClashes, 0);
        assert_eq!(trail.unwind(5).count(), 0);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_unwind_to_zero_empties() {
        let mut trail = Trail::with_capacity(4);
        trail.record(Slot::Selected(0), 0);
        trail.record(Slot::PrimaryUses(2), 0);
        assert_eq!(trail.unwind(0).count(), 2);
        assert!(trail.is_empty());
    }
}
