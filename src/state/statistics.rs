// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by additional methods.

use serde::Serialize;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Every generated combination, feasible or not.
    CombinationsExamined,
    /// Combinations rejected because two groups share a primary marker.
    PrimaryClashes,
    /// Combinations with unique primaries that left a target under-covered.
    CoverageShortfalls,
    /// Size levels entered.
    SizeLevels,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SearchContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

/// Statistics as reported with a search outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchStats {
    pub combinations_examined: u64,
    pub primary_clashes: u64,
    pub coverage_shortfalls: u64,
    pub size_levels: u64,
    pub elapsed_seconds: f64,
}

impl SearchStats {
    pub fn new(statistics: &Statistics, elapsed_seconds: f64) -> Self {
        Self {
            combinations_examined: statistics.get(Counters::CombinationsExamined),
            primary_clashes: statistics.get(Counters::PrimaryClashes),
            coverage_shortfalls: statistics.get(Counters::CoverageShortfalls),
            size_levels: statistics.get(Counters::SizeLevels),
            elapsed_seconds,
        }
    }
}

struct CountingPredicate {
    filter: fn(&SearchContext) -> bool,
    counter: Counters,
}

impl std::fmt::Debug for CountingPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountingPredicate")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            ctx.statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}
