// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive minimum double-cover search.
//!
//! Given a set of target requirements and a catalog of small groups of
//! requirements (the first token of each group being its *primary marker*),
//! find the fewest groups such that
//!
//! - every target appears in at least two chosen groups, and
//! - no two chosen groups share a primary marker.
//!
//! The motivating case is choosing character "cores" in a game build, but
//! nothing here depends on that.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Problem data (immutable)
//!
//! Computed once per search from the targets and the filtered catalog:
//! - target indices covered by each group
//! - dense ids of primary markers
//!
//! ## Tier 2: Dynamic data (mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - the groups picked so far
//! - per-target coverage counts and per-primary use counts
//!
//! # Search Algorithm
//!
//! 1. **Filter**: keep groups naming at least two distinct targets
//! 2. **Size**: try combination sizes 1, 2, ... up to the depth bound
//! 3. **Pick**: enumerate index tuples of that size lexicographically
//! 4. **Feasibility**: reject primary clashes, then under-covered targets
//!
//! Steps 2–4 are predicates run by a backtracking [`SearchEngine`]; the
//! first feasible combination suspends the engine and is returned.
//!
//! # Example
//!
//! ```
//! use cover_search::{search, SearchOutcome};
//!
//! let outcome = search(["A", "B"], [vec!["A", "B", "C"], vec!["A", "B", "D"]], 6);
//! // Both groups have primary "A", and neither covers anything twice alone.
//! assert!(matches!(outcome, SearchOutcome::NotFound(_)));
//! ```

pub mod cancel;
pub mod catalog;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod observer;
pub mod parse;
pub mod predicates;
pub mod report;
pub mod runner;
pub mod search;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use cancel::CancellationToken;
pub use catalog::{Catalog, FilteredCatalog, Group, TargetSet};
pub use config::{BusyPolicy, MaxDepth, SearchConfig};
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::{InvalidInput, RunnerError};
pub use observer::{Progress, SearchObserver, SearchPhase};
pub use report::CoverageReport;
pub use runner::{SearchHandle, SearchRunner};
pub use search::{search, SearchOptions, SearchOutcome, SearchRequest, Solution};
pub use trail::Trail;
