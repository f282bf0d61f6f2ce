// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! None of these escape as panics: invalid input and cancellation are
//! reported through [`crate::search::SearchOutcome`], configuration and
//! runner failures through `Result`.

use serde::Serialize;
use thiserror::Error;

/// Why a search could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum InvalidInput {
    #[error("no target requirements were given")]
    EmptyTargets,

    #[error("the catalog contains no group of two or more tokens")]
    EmptyCatalog,

    #[error("no group contains two or more target requirements")]
    NoValidGroups,
}

/// The search was abandoned through its cancellation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search cancelled")]
pub struct Cancelled;

/// Configuration could not be extracted.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}

/// Failures of the background runner.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("a search is already running")]
    Busy,

    #[error("failed to spawn search worker: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("search worker panicked")]
    WorkerPanicked,
}
