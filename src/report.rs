// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-target coverage of a combination.

use serde::Serialize;

use crate::catalog::{Group, TargetSet};
use crate::context::REQUIRED_COVERAGE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetCoverage {
    pub target: String,
    /// Number of groups containing the target.
    pub count: usize,
}

/// How often each target is covered, in target order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CoverageReport {
    targets: Vec<TargetCoverage>,
}

impl CoverageReport {
    pub fn new<'a, I>(targets: &TargetSet, groups: I) -> Self
    where
        I: IntoIterator<Item = &'a Group>,
    {
        let mut counts = vec![0; targets.len()];
        for group in groups {
            for token in group.distinct_tokens() {
                if let Some(index) = targets.index_of(token) {
                    counts[index] += 1;
                }
            }
        }
        let targets = targets
            .iter()
            .zip(counts)
            .map(|(target, count)| TargetCoverage {
                target: target.to_owned(),
                count,
            })
            .collect();
        Self { targets }
    }

    pub fn targets(&self) -> &[TargetCoverage] {
        &self.targets
    }

    pub fn count_of(&self, target: &str) -> Option<usize> {
        self.targets
            .iter()
            .find(|coverage| coverage.target == target)
            .map(|coverage| coverage.count)
    }

    /// Targets covered fewer than two times.
    pub fn insufficient(&self) -> Vec<&str> {
        self.filtered(|count| count < REQUIRED_COVERAGE)
    }

    /// Targets covered more than two times.
    pub fn exceeded(&self) -> Vec<&str> {
        self.filtered(|count| count > REQUIRED_COVERAGE)
    }

    /// Every target covered exactly twice.
    pub fn is_exact(&self) -> bool {
        self.targets.iter().all(|c| c.count == REQUIRED_COVERAGE)
    }

    fn filtered(&self, keep: impl Fn(usize) -> bool) -> Vec<&str> {
        self.targets
            .iter()
            .filter(|coverage| keep(coverage.count))
            .map(|coverage| coverage.target.as_str())
            .collect()
    }
}
