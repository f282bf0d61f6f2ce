// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Requirement tokens, groups and the catalog they are drawn from.
//!
//! The catalog is the raw ordered list of groups as entered. Before a search
//! it is reduced by [`Catalog::filter`] to the groups with at least two tokens
//! that are target requirements (a repeated token counts each time).
//! Filtering is pure, order-preserving and idempotent; every filtered entry
//! remembers its original catalog position so that duplicate groups stay
//! distinguishable.

pub mod group;
pub mod targets;

pub use group::Group;
pub use targets::TargetSet;

/// Minimum number of target tokens a group needs to be searched.
pub const MIN_TARGET_OVERLAP: usize = 2;

/// Ordered sequence of parsed groups. Duplicates are distinct entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    groups: Vec<Group>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, group: Group) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keep the groups with at least [`MIN_TARGET_OVERLAP`] target tokens.
    pub fn filter(&self, targets: &TargetSet) -> FilteredCatalog {
        let entries = self
            .groups
            .iter()
            .enumerate()
            .filter(|(_, group)| target_overlap(group, targets) >= MIN_TARGET_OVERLAP)
            .map(|(position, group)| FilteredEntry {
                position,
                group: group.clone(),
            })
            .collect();
        FilteredCatalog { entries }
    }
}

impl FromIterator<Group> for Catalog {
    fn from_iter<I: IntoIterator<Item = Group>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

/// Number of tokens of `group` that are targets, repeats included.
pub fn target_overlap(group: &Group, targets: &TargetSet) -> usize {
    group
        .tokens()
        .iter()
        .filter(|token| targets.contains(token))
        .count()
}

/// A group that survived filtering, with its position in the full catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredEntry {
    pub position: usize,
    pub group: Group,
}

/// The catalog restricted to groups relevant to one target set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredCatalog {
    entries: Vec<FilteredEntry>,
}

impl FilteredCatalog {
    pub fn entries(&self) -> &[FilteredEntry] {
        &self.entries
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.entries.iter().map(|entry| &entry.group)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The surviving groups as a catalog of their own (positions are dropped).
    pub fn to_catalog(&self) -> Catalog {
        self.groups().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(tokens: &[&str]) -> Group {
        Group::new(tokens.iter().copied()).unwrap()
    }

    #[test]
    fn test_filter_requires_two_targets() {
        let targets: TargetSet = ["A", "B", "C"].into_iter().collect();
        let catalog: Catalog = vec![
            group(&["A", "X", "Y"]),
            group(&["X", "A", "B"]),
            group(&["C", "B", "A"]),
            group(&["Y", "Z"]),
        ]
        .into_iter()
        .collect();

        let filtered = catalog.filter(&targets);
        let positions: Vec<usize> = filtered.entries().iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn test_repeated_target_token_counts_each_time() {
        let targets: TargetSet = ["A", "B"].into_iter().collect();
        let catalog: Catalog = vec![group(&["A", "A", "X"]), group(&["A", "X", "Y"])]
            .into_iter()
            .collect();
        assert_eq!(target_overlap(&catalog.groups()[0], &targets), 2);
        let positions: Vec<usize> = catalog
            .filter(&targets)
            .entries()
            .iter()
            .map(|e| e.position)
            .collect();
        assert_eq!(positions, vec![0]);
    }

    #[test]
    fn test_single_target_needs_repeated_token() {
        let targets: TargetSet = ["X"].into_iter().collect();
        let catalog: Catalog = vec![group(&["X", "X", "Y"]), group(&["X", "Y"])]
            .into_iter()
            .collect();
        assert_eq!(catalog.filter(&targets).len(), 1);
    }

    #[test]
    fn test_empty_catalog_filters_to_empty() {
        let targets: TargetSet = ["A"].into_iter().collect();
        assert!(Catalog::new().filter(&targets).is_empty());
    }

    #[test]
    fn test_duplicates_survive_as_distinct_entries() {
        let targets: TargetSet = ["A", "B"].into_iter().collect();
        let catalog: Catalog = vec![group(&["A", "B"]), group(&["A", "B"])]
            .into_iter()
            .collect();
        let filtered = catalog.filter(&targets);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.entries()[1].position, 1);
    }
}
