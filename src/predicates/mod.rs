// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! The combination search is one engine program:
//!
//! ```text
//! CombinationSizePredicate   choose r = 1, 2, ..., depth
//! PickGroupPredicate         rounds 0..r: choose i0 < i1 < ... < i(r-1)
//! counting predicate         count the combination
//! ProgressPredicate          periodic progress notification
//! FeasibilityPredicate       unique primaries, every target covered twice
//! SuspendPredicate           stop at the first feasible combination
//! ```
//!
//! Depth-first backtracking over this program visits sizes in increasing
//! order and, within a size, index tuples in lexicographic order with the
//! rightmost index advancing fastest.

pub mod feasible;
pub mod pick;
pub mod progress;
pub mod size;

pub use feasible::FeasibilityPredicate;
pub use pick::PickGroupPredicate;
pub use progress::ProgressPredicate;
pub use size::CombinationSizePredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Always fails, forcing the engine to exhaust every alternative.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Suspends the engine, leaving the current state in the context.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_predicate() {
        let mut ctx = SearchContext::default();
        assert_eq!(FailPredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
    }

    #[test]
    fn test_suspend_predicate() {
        let mut ctx = SearchContext::default();
        assert_eq!(SuspendPredicate.try_pred(&mut ctx, 0), PredicateResult::Suspend);
    }
}
