// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use cover_search::{Catalog, Group, MaxDepth, SearchRequest, TargetSet};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const ALPHABET: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

/// A catalog with 40 copies of one group: nothing is ever feasible, and
/// depth 10 gives far too many combinations to finish.
pub fn endless_request() -> SearchRequest {
    let catalog = std::iter::repeat("A B C\n").take(40).collect::<String>();
    SearchRequest::from_text("A B C", &catalog, MaxDepth::new(10))
}

pub fn request(targets: &[&str], catalog: &[&[&str]], max_depth: i64) -> SearchRequest {
    let targets: TargetSet = targets.iter().copied().collect();
    let catalog: Catalog = catalog
        .iter()
        .filter_map(|tokens| Group::new(tokens.iter().copied()))
        .collect();
    SearchRequest::new(targets, catalog, MaxDepth::new(max_depth))
}

/// A random instance: 2–4 targets and 3–9 groups of 2–3 tokens.
pub fn random_request(rng: &mut StdRng) -> SearchRequest {
    let mut letters = ALPHABET.to_vec();
    letters.shuffle(rng);
    let target_count = rng.gen_range(2..=4);
    let targets: TargetSet = letters[..target_count].iter().copied().collect();

    let group_count = rng.gen_range(3..=9);
    let catalog: Catalog = (0..group_count)
        .filter_map(|_| {
            let len = rng.gen_range(2..=3);
            Group::new((0..len).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        })
        .collect();
    let max_depth = catalog.len() as i64;
    SearchRequest::new(targets, catalog, MaxDepth::new(max_depth))
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Whether the groups at `positions` of `catalog` form a valid cover.
pub fn is_feasible(targets: &TargetSet, catalog: &Catalog, positions: &[usize]) -> bool {
    let groups: Vec<&Group> = positions.iter().map(|&p| &catalog.groups()[p]).collect();

    let primaries: HashSet<&str> = groups.iter().map(|g| g.primary()).collect();
    if primaries.len() != groups.len() {
        return false;
    }
    targets.iter().all(|target| {
        groups
            .iter()
            .filter(|group| group.contains(target))
            .count()
            >= 2
    })
}

/// Smallest feasible combination by exhaustive enumeration of the
/// catalog's eligible groups, first in lexicographic order.
pub fn brute_force(request: &SearchRequest) -> Option<Vec<usize>> {
    let targets = request.targets();
    let catalog = request.catalog();
    let eligible: Vec<usize> = (0..catalog.len())
        .filter(|&p| {
            let group = &catalog.groups()[p];
            group.tokens().iter().filter(|t| targets.contains(t)).count() >= 2
        })
        .collect();
    let depth = request.max_depth().get().min(eligible.len());

    (1..=depth).find_map(|size| {
        combinations(eligible.len(), size)
            .into_iter()
            .map(|indices| indices.iter().map(|&i| eligible[i]).collect::<Vec<_>>())
            .find(|positions| is_feasible(targets, catalog, positions))
    })
}

/// All `k`-subsets of `0..n`, in lexicographic order.
pub fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn extend(
        n: usize,
        k: usize,
        start: usize,
        current: &mut Vec<usize>,
        out: &mut Vec<Vec<usize>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            extend(n, k, i + 1, current, out);
            current.pop();
        }
    }
    let mut out = Vec::new();
    extend(n, k, 0, &mut Vec::with_capacity(k), &mut out);
    out
}
