// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable problem data.

use std::collections::HashMap;

use crate::catalog::{FilteredCatalog, Group, TargetSet};

/// Immutable precomputed data.
///
/// Built once from the target set and filtered catalog when a search starts
/// and never changed afterwards. Tokens are replaced by dense indices so the
/// predicates only do array arithmetic:
/// - each filtered group knows the target indices it covers (distinct),
/// - each filtered group knows the dense id of its primary marker.
#[derive(Debug, Clone, Default)]
pub struct Problem {
    targets: TargetSet,
    filtered: FilteredCatalog,
    group_targets: Vec<Vec<usize>>,
    group_primary: Vec<usize>,
    primary_count: usize,
}

impl Problem {
    pub fn new(targets: TargetSet, filtered: FilteredCatalog) -> Self {
        let mut primary_ids: HashMap<&str, usize> = HashMap::new();
        let mut group_primary = Vec::with_capacity(filtered.len());
        let mut group_targets = Vec::with_capacity(filtered.len());

        for group in filtered.groups() {
            let next_id = primary_ids.len();
            group_primary.push(*primary_ids.entry(group.primary()).or_insert(next_id));
            group_targets.push(
                group
                    .distinct_tokens()
                    .filter_map(|token| targets.index_of(token))
                    .collect(),
            );
        }
        let primary_count = primary_ids.len();

        Self {
            targets,
            filtered,
            group_targets,
            group_primary,
            primary_count,
        }
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    pub fn filtered(&self) -> &FilteredCatalog {
        &self.filtered
    }

    /// Number of groups in the filtered catalog.
    pub fn group_count(&self) -> usize {
        self.group_targets.len()
    }

    pub fn group(&self, index: usize) -> &Group {
        &self.filtered.entries()[index].group
    }

    /// Original catalog position of a filtered group.
    pub fn catalog_position(&self, index: usize) -> usize {
        self.filtered.entries()[index].position
    }

    /// Target indices covered by a filtered group.
    pub fn target_hits(&self, index: usize) -> &[usize] {
        &self.group_targets[index]
    }

    /// Dense id of a filtered group's primary marker.
    pub fn primary_id(&self, index: usize) -> usize {
        self.group_primary[index]
    }

    /// Number of distinct primary markers among the filtered groups.
    pub fn primary_count(&self) -> usize {
        self.primary_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_dense_indices() {
        let targets: TargetSet = ["A", "B", "C"].into_iter().collect();
        let catalog: Catalog = [
            vec!["A", "B", "X"],
            vec!["Q", "C", "B"],
            vec!["A", "C", "C"],
        ]
        .into_iter()
        .filter_map(Group::new)
        .collect();
        let problem = Problem::new(targets.clone(), catalog.filter(&targets));

        assert_eq!(problem.group_count(), 3);
        assert_eq!(problem.target_hits(0), &[0, 1]);
        assert_eq!(problem.target_hits(1), &[2, 1]);
        assert_eq!(problem.target_hits(2), &[0, 2]);
        assert_eq!(problem.primary_id(0), 0);
        assert_eq!(problem.primary_id(1), 1);
        assert_eq!(problem.primary_id(2), 0);
        assert_eq!(problem.primary_count(), 2);
    }
}
