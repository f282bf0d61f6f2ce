// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining immutable problem data and mutable search state.
//!
//! The SearchContext is the core data structure passed to every predicate:
//! - [`Problem`]: targets and filtered groups, reduced to dense indices
//! - [`DynamicState`]: the partial combination and its incremental coverage,
//!   changed only through trailed setters
//! - [`Statistics`]: counters that survive backtracking
//!
//! It also carries the optional observer and the cancellation token. Each
//! search builds its own context, so independent searches share nothing.

mod dynamic;
mod memoized;

pub use dynamic::DynamicState;
pub use memoized::Problem;

use std::fmt;

use crate::cancel::CancellationToken;
use crate::observer::{Progress, SearchObserver, SearchPhase};
use crate::state::Statistics;
use crate::trail::{Slot, Trail};

/// Minimum number of picked groups that must contain each target.
pub const REQUIRED_COVERAGE: usize = 2;

pub struct SearchContext {
    pub problem: Problem,
    pub trail: Trail,
    pub state: DynamicState,
    pub statistics: Statistics,
    observer: Option<Box<dyn SearchObserver>>,
    cancellation: CancellationToken,
}

impl SearchContext {
    /// Create a context able to hold combinations of up to `depth` groups.
    ///
    /// `depth` is capped at the number of filtered groups.
    pub fn new(problem: Problem, depth: usize) -> Self {
        let depth = depth.min(problem.group_count());
        let state = DynamicState::new(&problem, depth);
        Self {
            problem,
            // Each pick records at most one entry per target, plus the
            // selection and primary bookkeeping.
            trail: Trail::with_capacity(depth * 8),
            state,
            statistics: Statistics::new(),
            observer: None,
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn SearchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Forward a notification to the observer, if any.
    pub fn notify(&mut self, progress: Progress) {
        if let Some(observer) = self.observer.as_mut() {
            observer.notify(progress);
        }
    }

    pub fn enter_phase(&mut self, phase: SearchPhase) {
        self.state.phase = phase;
        self.notify(Progress::Phase(phase));
    }

    /// Maximum combination size this context can hold.
    pub fn depth(&self) -> usize {
        self.state.selected.len()
    }

    /// Restore trailed state to what it was when the trail had `checkpoint` entries.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        for entry in self.trail.unwind(checkpoint) {
            *self.state.slot_mut(entry.slot) = entry.old_value;
        }
    }

    fn set(&mut self, slot: Slot, value: usize) {
        let current = self.state.slot_mut(slot);
        let old_value = std::mem::replace(current, value);
        self.trail.record(slot, old_value);
    }

    fn increment(&mut self, slot: Slot) -> usize {
        let value = *self.state.slot_mut(slot) + 1;
        self.set(slot, value);
        value
    }

    /// Set the size of the combinations to enumerate (trail-tracked).
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`Self::depth`].
    pub fn set_size(&mut self, size: usize) {
        assert!(size <= self.depth(), "Combination size out of bounds: {}", size);
        self.set(Slot::Size, size);
    }

    /// Add filtered group `group` to the combination at `round` (trail-tracked).
    ///
    /// Coverage and primary bookkeeping are updated incrementally, so the
    /// feasibility test at the end of a combination is O(|targets|).
    pub fn pick(&mut self, round: usize, group: usize) {
        self.set(Slot::Selected(round), group);
        for i in 0..self.problem.target_hits(group).len() {
            let target = self.problem.target_hits(group)[i];
            self.increment(Slot::Coverage(target));
        }
        let primary = self.problem.primary_id(group);
        if self.increment(Slot::PrimaryUses(primary)) == 2 {
            self.increment(Slot::PrimaryClashes);
        }
    }

    pub fn size(&self) -> usize {
        self.state.size
    }

    /// Filtered-catalog indices of the current combination.
    pub fn selected(&self) -> &[usize] {
        &self.state.selected[..self.state.size]
    }

    pub fn has_primary_clash(&self) -> bool {
        self.state.primary_clashes > 0
    }

    /// Every target is contained in at least [`REQUIRED_COVERAGE`] picked groups.
    pub fn is_covered(&self) -> bool {
        self.state
            .coverage
            .iter()
            .all(|&count| count >= REQUIRED_COVERAGE)
    }
}

impl fmt::Debug for SearchContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchContext")
            .field("problem", &self.problem)
            .field("state", &self.state)
            .field("trail_len", &self.trail.len())
            .field("statistics", &self.statistics)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(Problem::default(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Group, TargetSet};

    fn context(targets: &[&str], groups: &[&[&str]], depth: usize) -> SearchContext {
        let targets: TargetSet = targets.iter().copied().collect();
        let catalog: Catalog = groups
            .iter()
            .filter_map(|g| Group::new(g.iter().copied()))
            .collect();
        let filtered = catalog.filter(&targets);
        SearchContext::new(Problem::new(targets, filtered), depth)
    }

    #[test]
    fn test_pick_updates_coverage() {
        let mut ctx = context(&["A", "B"], &[&["A", "B", "C"], &["D", "A", "B"]], 2);
        ctx.set_size(2);
        ctx.pick(0, 0);
        assert!(!ctx.is_covered());
        ctx.pick(1, 1);
        assert!(ctx.is_covered());
        assert!(!ctx.has_primary_clash());
        assert_eq!(ctx.selected(), &[0, 1]);
    }

    #[test]
    fn test_rewind_restores_state() {
        let mut ctx = context(&["A", "B"], &[&["A", "B", "C"], &["A", "B", "D"]], 2);
        ctx.set_size(2);
        ctx.pick(0, 0);
        let checkpoint = ctx.trail.len();
        ctx.pick(1, 1);
        assert!(ctx.has_primary_clash());
        assert_eq!(ctx.state.coverage, vec![2, 2]);

        ctx.rewind_to(checkpoint);
        assert!(!ctx.has_primary_clash());
        assert_eq!(ctx.state.coverage, vec![1, 1]);
        assert_eq!(ctx.state.primary_uses, vec![1]);

        ctx.rewind_to(0);
        assert_eq!(ctx.size(), 0);
        assert_eq!(ctx.state.coverage, vec![0, 0]);
        assert!(ctx.trail.is_empty());
    }

    #[test]
    fn test_three_way_clash_counts_once() {
        let mut ctx = context(
            &["A", "B"],
            &[&["A", "B"], &["A", "B", "X"], &["A", "B", "Y"]],
            3,
        );
        ctx.set_size(3);
        ctx.pick(0, 0);
        ctx.pick(1, 1);
        ctx.pick(2, 2);
        assert_eq!(ctx.state.primary_clashes, 1);
        assert_eq!(ctx.state.primary_uses, vec![3]);
    }

    #[test]
    fn test_depth_capped_at_group_count() {
        let ctx = context(&["A", "B"], &[&["A", "B"], &["B", "A"], &["Q", "R"]], 10);
        assert_eq!(ctx.depth(), 2);
    }

    #[test]
    #[should_panic(expected = "Combination size out of bounds")]
    fn test_size_beyond_depth() {
        let mut ctx = SearchContext::default();
        ctx.set_size(1);
    }
}
