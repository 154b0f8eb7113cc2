//! Property-based tests for the compliance evaluator
//!
//! Uses proptest to verify properties that should hold for all month sets.

use std::collections::BTreeSet;

use monthwatch::core::models::{ComplianceStatus, MonthIndex};
use monthwatch::core::services::{classify, longest_consecutive_run, validate_assignment_change};
use proptest::prelude::*;

fn month_set() -> impl Strategy<Value = BTreeSet<MonthIndex>> {
    prop::collection::btree_set(0u32..12, 0..=12)
        .prop_map(|set| set.into_iter().map(|i| MonthIndex::new(i).unwrap()).collect())
}

proptest! {
    /// The run never exceeds the number of distinct months
    #[test]
    fn run_is_bounded_by_set_size(months in month_set()) {
        let run = longest_consecutive_run(months.iter().copied());
        prop_assert!(run <= months.len());
        prop_assert_eq!(run == 0, months.is_empty());
    }

    /// Adding a month never shortens the run
    #[test]
    fn adding_a_month_is_monotonic(months in month_set(), extra in 0u32..12) {
        let before = longest_consecutive_run(months.iter().copied());
        let mut grown = months;
        grown.insert(MonthIndex::new(extra).unwrap());
        prop_assert!(longest_consecutive_run(grown) >= before);
    }

    /// Removing months from an accepted set keeps it accepted
    #[test]
    fn subsets_of_accepted_sets_are_accepted(
        months in month_set(),
        limit in 1usize..=12,
        drop in 0u32..12,
    ) {
        prop_assume!(validate_assignment_change(months.iter().copied(), limit).is_ok());
        let mut shrunk = months;
        shrunk.remove(&MonthIndex::new(drop).unwrap());
        prop_assert!(validate_assignment_change(shrunk, limit).is_ok());
    }

    /// Validation fails exactly when the run exceeds the limit
    #[test]
    fn validation_matches_run(months in month_set(), limit in 0usize..=12) {
        let run = longest_consecutive_run(months.iter().copied());
        let result = validate_assignment_change(months, limit);
        prop_assert_eq!(result.is_err(), run > limit);
    }

    /// Danger means the run reached the limit
    #[test]
    fn danger_iff_at_or_over_limit(run in 0usize..=12, limit in 1usize..=12) {
        let status = classify(run, limit);
        prop_assert_eq!(status == ComplianceStatus::Danger, run >= 1 && run >= limit);
    }
}
