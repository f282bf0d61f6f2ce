// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CombinationSizePredicate - chooses how many groups to pick.

use tracing::debug;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::observer::{binomial, Progress, SearchPhase};
use crate::state::Counters;

/// Chooses the combination size, smallest first.
///
/// # Choices
///
/// One choice per size up to the context depth:
/// - Choice 0 → size 1
/// - Choice 1 → size 2
/// - ...
///
/// Backtracking into this predicate means every combination of the previous
/// size failed, so the previous level is reported exhausted before the next
/// one starts.
#[derive(Debug, Default)]
pub struct CombinationSizePredicate;

impl Predicate for CombinationSizePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match ctx.depth() {
            0 => PredicateResult::Failure,
            depth => PredicateResult::Choices(depth),
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        if choice > 0 {
            finish_level(ctx, choice);
        }
        let size = choice + 1;
        ctx.set_size(size);
        ctx.statistics.increment_counter(Counters::SizeLevels);
        ctx.state.level_start = ctx.statistics.get(Counters::CombinationsExamined);

        let combinations = binomial(ctx.problem.group_count(), size);
        debug!(size, combinations, "searching combinations");
        ctx.enter_phase(SearchPhase::Searching(size));
        ctx.notify(Progress::SizeStarted { size, combinations });
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "CombinationSize"
    }
}

/// Report that every combination of `size` was examined without success.
pub(crate) fn finish_level(ctx: &mut SearchContext, size: usize) {
    let examined = ctx.statistics.get(Counters::CombinationsExamined) - ctx.state.level_start;
    debug!(size, examined, "no feasible combination of this size");
    ctx.notify(Progress::SizeExhausted { size, examined });
}
