// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Free-form text to targets and groups.
//!
//! Tokens are separated by any run of whitespace, ASCII commas or full-width
//! commas (`，`), so rows pasted from a spreadsheet work unchanged. Each line
//! of catalog text is one group; lines with fewer than two tokens are skipped.

use tracing::debug;

use crate::catalog::{Catalog, Group, TargetSet};

/// Largest group size the search is designed around. Longer lines are kept.
pub const MAX_GROUP_TOKENS: usize = 3;

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '，'
}

/// Split text into non-empty tokens.
pub fn tokens(text: &str) -> Vec<String> {
    text.split(is_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse a target list. Duplicates collapse to their first occurrence.
pub fn parse_targets(text: &str) -> TargetSet {
    tokens(text).into_iter().collect()
}

/// Parse catalog text, one group per line.
pub fn parse_catalog(text: &str) -> Catalog {
    let mut catalog = Catalog::new();
    for (line_no, line) in text.lines().enumerate() {
        let Some(group) = Group::new(tokens(line)) else {
            if !line.trim().is_empty() {
                debug!(line = line_no + 1, "skipping line with fewer than two tokens");
            }
            continue;
        };
        if group.len() > MAX_GROUP_TOKENS {
            debug!(
                line = line_no + 1,
                tokens = group.len(),
                "group longer than {MAX_GROUP_TOKENS} tokens"
            );
        }
        catalog.push(group);
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators() {
        assert_eq!(
            tokens("  Rend,Alpha ,\tTitan，White Fang  "),
            vec!["Rend", "Alpha", "Titan", "White", "Fang"]
        );
    }

    #[test]
    fn test_only_separators() {
        assert!(tokens(" ,， \t").is_empty());
    }

    #[test]
    fn test_catalog_skips_short_lines() {
        let catalog = parse_catalog("A B C\n\nD\n E , F \n");
        let groups: Vec<String> = catalog.groups().iter().map(|g| g.to_string()).collect();
        assert_eq!(groups, vec!["A - B - C", "E - F"]);
    }

    #[test]
    fn test_long_lines_are_kept() {
        let catalog = parse_catalog("A B C D");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.groups()[0].len(), 4);
    }

    #[test]
    fn test_targets_deduplicate() {
        let targets = parse_targets("A, B A\tC");
        assert_eq!(targets.iter().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }
}
