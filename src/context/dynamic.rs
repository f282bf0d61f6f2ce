// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.

use crate::observer::SearchPhase;
use crate::trail::Slot;

use super::Problem;

/// Mutable search state.
///
/// Fields reachable through [`Slot`] are trailed: every write goes through
/// [`super::SearchContext`], which records the old value so backtracking can
/// restore it. The remaining fields are bookkeeping for reporting and are
/// never rewound.
#[derive(Debug, Clone)]
pub struct DynamicState {
    /// Size of the combinations currently enumerated.
    pub size: usize,

    /// Filtered-catalog index picked at each round; only `..size` is meaningful.
    pub selected: Vec<usize>,

    /// Per target: how many picked groups contain it.
    pub coverage: Vec<usize>,

    /// Per primary id: how many picked groups carry it.
    pub primary_uses: Vec<usize>,

    /// How many primary ids are currently used more than once.
    pub primary_clashes: usize,

    /// Combinations examined when the current size level began.
    /// NOT trail-tracked.
    pub level_start: u64,

    /// NOT trail-tracked.
    pub phase: SearchPhase,
}

impl DynamicState {
    /// Zeroed state able to hold combinations of up to `depth` groups.
    pub fn new(problem: &Problem, depth: usize) -> Self {
        Self {
            size: 0,
            selected: vec![0; depth],
            coverage: vec![0; problem.targets().len()],
            primary_uses: vec![0; problem.primary_count()],
            primary_clashes: 0,
            level_start: 0,
            phase: SearchPhase::Idle,
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: Slot) -> &mut usize {
        match slot {
            Slot::Size => &mut self.size,
            Slot::Selected(round) => &mut self.selected[round],
            Slot::Coverage(target) => &mut self.coverage[target],
            Slot::PrimaryUses(primary) => &mut self.primary_uses[primary],
            Slot::PrimaryClashes => &mut self.primary_clashes,
        }
    }
}
