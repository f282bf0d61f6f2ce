// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for non-deterministic search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! is either a deterministic step (count, report, test) or a choice point
//! (pick a size, pick a group). Predicates can succeed, fail, offer choices
//! or suspend the engine.
//!
//! # Example
//!
//! ```
//! use cover_search::engine::{Predicate, PredicateResult};
//! use cover_search::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct Coin;
//!
//! impl Predicate for Coin {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(
//!         &mut self,
//!         _ctx: &mut SearchContext,
//!         _round: usize,
//!         _choice: usize,
//!     ) -> PredicateResult {
//!         PredicateResult::Success
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Coin"
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::context::SearchContext;

/// Result of attempting a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Lets one predicate pick the groups of a combination one round at a time.
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A predicate that ends an engine program.
///
/// Terminal predicates never return `Success`, so the engine can never run
/// off the end of its predicate list. [`super::EngineBuilder::terminal`] only
/// accepts these.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the non-deterministic engine.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous choice point
/// 4. If Choices(n): engine calls `retry_pred` for choice 0, then 1, ... on
///    each backtrack, until one succeeds or all n are used up
///
/// # Trail Integration
///
/// Predicates change `SearchContext` only through its trailed setters. Before
/// every `try_pred` and `retry_pred` the engine rewinds the trail to the
/// point where the predicate was entered, so each choice starts from the
/// same state.
pub trait Predicate: Debug + Send {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// May return `Success`, `SuccessSamePredicate` or `Failure`; never
    /// `Choices` or `Suspend`.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // By default, we do not allow retry. Predicates that return Choices
        // must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for logging and debugging.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
