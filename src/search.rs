// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The minimum double-cover search.
//!
//! [`SearchRequest::run_with`] validates the input, filters the catalog,
//! builds a [`SearchContext`] and runs the combination program described in
//! [`crate::predicates`]. The first feasible combination found is final:
//! its size is minimal, and among combinations of that size it is the first
//! in lexicographic order of filtered-catalog index.
//!
//! Nothing outside the request and options is read or written; the outcome
//! is a plain value.

use std::time::Instant;

use serde::Serialize;
use tracing::info;

use crate::cancel::CancellationToken;
use crate::catalog::{Catalog, Group, TargetSet};
use crate::config::{MaxDepth, DEFAULT_PROGRESS_INTERVAL};
use crate::context::{Problem, SearchContext};
use crate::engine::EngineBuilder;
use crate::error::InvalidInput;
use crate::observer::{Progress, SearchObserver, SearchPhase};
use crate::parse;
use crate::predicates::{
    size::finish_level, CombinationSizePredicate, FeasibilityPredicate, PickGroupPredicate,
    ProgressPredicate, SuspendPredicate,
};
use crate::report::CoverageReport;
use crate::state::{Counters, SearchStats, Statistics};

/// A feasible combination of minimal size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// The chosen groups, in catalog order.
    pub groups: Vec<Group>,
    /// Catalog position of each chosen group.
    pub positions: Vec<usize>,
    pub size: usize,
    pub coverage: CoverageReport,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found(Solution),
    /// No feasible combination up to the depth bound.
    NotFound(SearchStats),
    /// Abandoned through the cancellation token; carries no combination.
    Cancelled(SearchStats),
    InvalidInput { reason: InvalidInput },
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Found(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn stats(&self) -> Option<&SearchStats> {
        match self {
            Self::Found(solution) => Some(&solution.stats),
            Self::NotFound(stats) | Self::Cancelled(stats) => Some(stats),
            Self::InvalidInput { .. } => None,
        }
    }

    pub fn combinations_examined(&self) -> Option<u64> {
        self.stats().map(|stats| stats.combinations_examined)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// How a search reports progress and how it can be stopped.
pub struct SearchOptions {
    observer: Option<Box<dyn SearchObserver>>,
    cancellation: CancellationToken,
    progress_interval: u64,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(mut self, observer: Box<dyn SearchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            observer: None,
            cancellation: CancellationToken::new(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Inputs of one search, captured once and never changed.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    targets: TargetSet,
    catalog: Catalog,
    max_depth: MaxDepth,
}

impl SearchRequest {
    pub fn new(targets: TargetSet, catalog: Catalog, max_depth: MaxDepth) -> Self {
        Self {
            targets,
            catalog,
            max_depth,
        }
    }

    /// Parse free-form target and catalog text.
    pub fn from_text(targets: &str, catalog: &str, max_depth: MaxDepth) -> Self {
        Self::new(parse::parse_targets(targets), parse::parse_catalog(catalog), max_depth)
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn max_depth(&self) -> MaxDepth {
        self.max_depth
    }

    /// Run without observer or cancellation.
    pub fn run(&self) -> SearchOutcome {
        self.run_with(SearchOptions::default())
    }

    pub fn run_with(&self, options: SearchOptions) -> SearchOutcome {
        let started = Instant::now();
        let SearchOptions {
            mut observer,
            cancellation,
            progress_interval,
        } = options;

        if self.targets.is_empty() {
            return invalid(InvalidInput::EmptyTargets);
        }
        if self.catalog.is_empty() {
            return invalid(InvalidInput::EmptyCatalog);
        }

        if let Some(observer) = observer.as_mut() {
            observer.notify(Progress::Phase(SearchPhase::Filtering));
        }
        let filtered = self.catalog.filter(&self.targets);
        if filtered.is_empty() {
            if let Some(observer) = observer.as_mut() {
                observer.notify(Progress::Phase(SearchPhase::Exhausted));
            }
            return invalid(InvalidInput::NoValidGroups);
        }

        let depth = self.max_depth.get().min(filtered.len());
        info!(
            targets = self.targets.len(),
            groups = filtered.len(),
            depth,
            "starting search"
        );

        let problem = Problem::new(self.targets.clone(), filtered);
        let mut ctx = SearchContext::new(problem, depth).with_cancellation(cancellation);
        if let Some(observer) = observer {
            ctx = ctx.with_observer(observer);
        }

        let engine = EngineBuilder::new()
            .add(Box::new(CombinationSizePredicate))
            .add(Box::new(PickGroupPredicate))
            .add(Statistics::counting_predicate(Counters::CombinationsExamined, None))
            .add(Box::new(ProgressPredicate::new(progress_interval)))
            .add(Box::new(FeasibilityPredicate))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let result = engine.search(&mut ctx);
        let stats = SearchStats::new(&ctx.statistics, started.elapsed().as_secs_f64());

        match result {
            Ok(Some(_)) => {
                let solution = solution(&ctx, stats);
                info!(
                    size = solution.size,
                    examined = solution.stats.combinations_examined,
                    elapsed = solution.stats.elapsed_seconds,
                    "found feasible combination"
                );
                ctx.enter_phase(SearchPhase::Found);
                SearchOutcome::Found(solution)
            }
            Ok(None) => {
                finish_level(&mut ctx, depth);
                info!(
                    examined = stats.combinations_examined,
                    elapsed = stats.elapsed_seconds,
                    "no feasible combination within depth {depth}"
                );
                ctx.enter_phase(SearchPhase::Exhausted);
                SearchOutcome::NotFound(stats)
            }
            Err(_) => {
                info!(examined = stats.combinations_examined, "search cancelled");
                ctx.enter_phase(SearchPhase::Cancelled);
                SearchOutcome::Cancelled(stats)
            }
        }
    }
}

fn invalid(reason: InvalidInput) -> SearchOutcome {
    info!(%reason, "search not started");
    SearchOutcome::InvalidInput { reason }
}

fn solution(ctx: &SearchContext, stats: SearchStats) -> Solution {
    let problem = &ctx.problem;
    let groups: Vec<Group> = ctx
        .selected()
        .iter()
        .map(|&index| problem.group(index).clone())
        .collect();
    let positions = ctx
        .selected()
        .iter()
        .map(|&index| problem.catalog_position(index))
        .collect();
    let coverage = CoverageReport::new(problem.targets(), &groups);
    Solution {
        size: groups.len(),
        groups,
        positions,
        coverage,
        stats,
    }
}

/// Search with plain token lists.
///
/// Catalog entries with fewer than two non-empty tokens are discarded, and a
/// non-positive `max_depth` falls back to the default.
///
/// ```
/// use cover_search::search;
///
/// let outcome = search(["A", "B"], [vec!["A", "B", "C"], vec!["D", "A", "B"]], 6);
/// let solution = outcome.solution().unwrap();
/// assert_eq!(solution.size, 2);
/// ```
pub fn search<T, C, G, S>(targets: T, catalog: C, max_depth: i64) -> SearchOutcome
where
    T: IntoIterator<Item = S>,
    C: IntoIterator<Item = G>,
    G: IntoIterator<Item = S>,
    S: Into<String>,
{
    let request = SearchRequest::new(
        targets.into_iter().collect(),
        catalog.into_iter().filter_map(Group::new).collect(),
        MaxDepth::new(max_depth),
    );
    request.run()
}
