// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PickGroupPredicate - picks the groups of one combination.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// Picks one filtered group per round, in increasing index order.
///
/// Runs for `size` rounds. At round k it offers the indices that can still
/// be followed by `size - k - 1` larger ones:
///
/// ```text
/// lower  = selected[k-1] + 1   (0 at round 0)
/// higher = n - (size - k)
/// ```
///
/// Choice c picks `lower + c`. At round `size` the combination is complete
/// and the predicate succeeds, handing over to the counting and feasibility
/// predicates.
#[derive(Debug, Default)]
pub struct PickGroupPredicate;

impl PickGroupPredicate {
    fn lower_bound(ctx: &SearchContext, round: usize) -> usize {
        match round {
            0 => 0,
            _ => ctx.state.selected[round - 1] + 1,
        }
    }
}

impl Predicate for PickGroupPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let size = ctx.size();
        if round >= size {
            return PredicateResult::Success;
        }

        let lower = Self::lower_bound(ctx, round);
        let higher = ctx.problem.group_count() - (size - round);
        if lower > higher {
            return PredicateResult::Failure;
        }
        PredicateResult::Choices(higher - lower + 1)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let group = Self::lower_bound(ctx, round) + choice;
        ctx.pick(round, group);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "PickGroup"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Group, TargetSet};
    use crate::context::Problem;
    use crate::engine::EngineBuilder;
    use crate::predicates::SuspendPredicate;

    /// Collects every complete combination, then fails to force backtracking.
    #[derive(Debug, Default)]
    struct Collect(std::sync::Arc<std::sync::Mutex<Vec<Vec<usize>>>>);

    impl Predicate for Collect {
        fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            self.0.lock().unwrap().push(ctx.selected().to_vec());
            PredicateResult::Failure
        }
    }

    fn context(groups: usize, size: usize) -> SearchContext {
        let targets: TargetSet = ["A", "B"].into_iter().collect();
        let catalog: Catalog = (0..groups)
            .filter_map(|i| Group::new([format!("P{i}"), "A".into(), "B".into()]))
            .collect();
        let filtered = catalog.filter(&targets);
        let mut ctx = SearchContext::new(Problem::new(targets, filtered), size);
        ctx.set_size(size);
        ctx
    }

    #[test]
    fn test_lexicographic_order() {
        let mut ctx = context(4, 2);
        let seen = Collect::default();
        let log = seen.0.clone();
        let engine = EngineBuilder::new()
            .add(Box::new(PickGroupPredicate))
            .add(Box::new(seen))
            .terminal(Box::new(SuspendPredicate))
            .build();

        assert!(engine.search(&mut ctx).unwrap().is_none());
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_choice_counts() {
        let mut ctx = context(5, 3);
        let mut pick = PickGroupPredicate;
        // Round 0 may start at 0, 1 or 2 and still leave room for two more.
        assert_eq!(pick.try_pred(&mut ctx, 0), PredicateResult::Choices(3));
        assert_eq!(pick.retry_pred(&mut ctx, 0, 1), PredicateResult::SuccessSamePredicate);
        // After picking 1, round 1 may pick 2 or 3.
        assert_eq!(pick.try_pred(&mut ctx, 1), PredicateResult::Choices(2));
        assert_eq!(pick.try_pred(&mut ctx, 3), PredicateResult::Success);
    }
}
