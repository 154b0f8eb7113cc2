//! Tests for the compliance evaluator

use monthwatch::core::models::{Classification, ComplianceStatus};
use monthwatch::core::services::{
    LimitExceeded, evaluate, longest_consecutive_run, validate_assignment_change,
};

use crate::common::{m, months};

#[test]
fn test_run_of_empty_set_is_zero() {
    assert_eq!(longest_consecutive_run(months(&[])), 0);
}

#[test]
fn test_run_ignores_gaps() {
    assert_eq!(longest_consecutive_run(months(&[0, 1, 2, 5, 6])), 3);
    assert_eq!(longest_consecutive_run(months(&[0, 2, 4, 6])), 1);
}

#[test]
fn test_december_does_not_wrap_to_january() {
    assert_eq!(longest_consecutive_run(months(&[10, 11, 0, 1])), 2);
}

#[test]
fn test_duplicates_collapse() {
    assert_eq!(longest_consecutive_run([m(3), m(3), m(4)]), 2);
}

#[test]
fn test_professional_at_five_months_is_warning() {
    let eval = evaluate(months(&[0, 1, 2, 3, 4]), Some(Classification::Professional));
    assert_eq!(eval.run, 5);
    assert_eq!(eval.limit, 6);
    assert_eq!(eval.status, ComplianceStatus::Warning);
    assert_eq!(eval.remaining(), 1);
}

#[test]
fn test_reaching_the_limit_is_allowed() {
    assert_eq!(validate_assignment_change(months(&[0, 1, 2, 3, 4, 5]), 6), Ok(6));
}

#[test]
fn test_exceeding_the_limit_is_rejected() {
    assert_eq!(
        validate_assignment_change(months(&[0, 1, 2, 3, 4, 5, 6]), 6),
        Err(LimitExceeded { run: 7, limit: 6 })
    );
}

#[test]
fn test_unclassified_is_unassigned_regardless_of_run() {
    let eval = evaluate(months(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]), None);
    assert_eq!(eval.run, 12);
    assert_eq!(eval.limit, 0);
    assert_eq!(eval.status, ComplianceStatus::Unassigned);
}
