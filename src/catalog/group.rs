// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A single option group: an ordered run of requirement tokens whose first
//! token is the primary marker.

use std::fmt;

use serde::Serialize;

/// Smallest number of tokens a line needs before it counts as a group.
pub const MIN_GROUP_TOKENS: usize = 2;

/// An immutable group of requirement tokens.
///
/// The first token is the *primary marker*. No two groups in a feasible
/// combination may share a primary marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Group {
    tokens: Vec<String>,
}

impl Group {
    /// Build a group, or `None` when fewer than [`MIN_GROUP_TOKENS`] tokens remain
    /// after dropping empty ones.
    pub fn new<I, S>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(Into::into)
            .filter(|token| !token.is_empty())
            .collect();
        if tokens.len() < MIN_GROUP_TOKENS {
            return None;
        }
        Some(Self { tokens })
    }

    /// The primary marker (first token).
    pub fn primary(&self) -> &str {
        &self.tokens[0]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Groups always hold at least two tokens.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Distinct tokens in first-occurrence order.
    pub fn distinct_tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(i, token)| !self.tokens[..*i].contains(token))
            .map(|(_, token)| token.as_str())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" - "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_groups_rejected() {
        assert!(Group::new(["A"]).is_none());
        assert!(Group::new(["A", ""]).is_none());
        assert!(Group::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_primary_is_first_token() {
        let group = Group::new(["Rend", "Alpha", "Titan"]).unwrap();
        assert_eq!(group.primary(), "Rend");
        assert_eq!(group.len(), 3);
        assert!(group.contains("Titan"));
        assert!(!group.contains("Fang"));
    }

    #[test]
    fn test_distinct_tokens() {
        let group = Group::new(["A", "B", "A"]).unwrap();
        assert_eq!(group.distinct_tokens().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_display() {
        let group = Group::new(["A", "B", "C"]).unwrap();
        assert_eq!(group.to_string(), "A - B - C");
    }
}
