// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The target set: requirements every solution must cover twice.

use std::collections::HashMap;

use serde::Serialize;

/// Ordered set of unique requirement tokens.
///
/// Entry order is kept for reporting. Each target also has a dense index
/// (its position) used for coverage counting during the search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TargetSet {
    tokens: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl TargetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target. Returns false if it was already present or empty.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if token.is_empty() || self.index.contains_key(&token) {
            return false;
        }
        self.index.insert(token.clone(), self.tokens.len());
        self.tokens.push(token);
        true
    }

    /// Dense index of a target token, if it is one.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TargetSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut targets = TargetSet::new();
        for token in iter {
            targets.insert(token);
        }
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_keep_first_position() {
        let targets: TargetSet = ["B", "A", "B", "C", "A"].into_iter().collect();
        assert_eq!(targets.iter().collect::<Vec<_>>(), vec!["B", "A", "C"]);
        assert_eq!(targets.index_of("A"), Some(1));
        assert_eq!(targets.index_of("Z"), None);
    }

    #[test]
    fn test_empty_tokens_ignored() {
        let mut targets = TargetSet::new();
        assert!(!targets.insert(""));
        assert!(targets.is_empty());
        assert!(targets.insert("X"));
        assert!(!targets.insert("X"));
        assert_eq!(targets.len(), 1);
        assert_eq!(targets.get(0), Some("X"));
    }
}
