// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-search counters.
//!
//! The trailed search state itself lives in [`crate::context::DynamicState`];
//! counters here are never rewound on backtracking.

pub mod statistics;

pub use statistics::{Counters, SearchStats, Statistics};
