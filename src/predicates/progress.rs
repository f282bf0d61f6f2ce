// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ProgressPredicate - periodic count-level notifications.

use tracing::trace;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::observer::Progress;
use crate::state::Counters;

/// Notifies the observer every `interval` combinations. Always succeeds.
///
/// An interval of zero disables the notifications.
#[derive(Debug)]
pub struct ProgressPredicate {
    interval: u64,
}

impl ProgressPredicate {
    pub fn new(interval: u64) -> Self {
        Self { interval }
    }
}

impl Predicate for ProgressPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let examined = ctx.statistics.get(Counters::CombinationsExamined);
        if self.interval > 0 && examined % self.interval == 0 {
            let size = ctx.size();
            trace!(size, examined, "progress");
            ctx.notify(Progress::Examined { size, examined });
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Progress"
    }
}
