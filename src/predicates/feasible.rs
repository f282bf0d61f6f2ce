// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! FeasibilityPredicate - accepts or rejects a complete combination.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

/// Succeeds iff the current combination is feasible:
///
/// 1. no two picked groups share a primary marker, and
/// 2. every target is contained in at least two picked groups.
///
/// The primary test comes first; a clash rejects the combination without
/// looking at coverage. Both tests read counts that [`SearchContext::pick`]
/// maintained incrementally.
#[derive(Debug, Default)]
pub struct FeasibilityPredicate;

impl Predicate for FeasibilityPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if ctx.has_primary_clash() {
            ctx.statistics.increment_counter(Counters::PrimaryClashes);
            return PredicateResult::Failure;
        }
        if !ctx.is_covered() {
            ctx.statistics.increment_counter(Counters::CoverageShortfalls);
            return PredicateResult::Failure;
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Feasibility"
    }
}
