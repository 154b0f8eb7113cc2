//! Compliance evaluation - consecutive-month runs and status tiers
//!
//! Pure functions over month sets. Every consumer (schedule editing, the
//! registry view, reports) derives status through this module so the rules
//! live in one place.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::core::models::{Classification, ComplianceStatus, MonthIndex, limit_for};

/// A proposed assignment would exceed the classification limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{run} consecutive months exceeds the limit of {limit}")]
pub struct LimitExceeded {
    /// Longest run in the proposed month set
    pub run: usize,
    /// Limit that was exceeded
    pub limit: usize,
}

/// The `{status, run, limit}` triple reported per person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Longest consecutive run of assigned months
    pub run: usize,
    /// Consecutive-month limit (0 when unclassified)
    pub limit: usize,
    /// Derived status
    pub status: ComplianceStatus,
}

impl Evaluation {
    /// Months left before the limit is reached
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.run)
    }
}

/// Length of the longest run of consecutive months
///
/// Duplicates are collapsed. December is not followed by January, so
/// `{11, 0}` has a longest run of 1.
///
/// # Returns
///
/// `0` for an empty input, `1` for a single month.
#[must_use]
pub fn longest_consecutive_run<I>(months: I) -> usize
where
    I: IntoIterator<Item = MonthIndex>,
{
    let sorted: BTreeSet<MonthIndex> = months.into_iter().collect();

    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<MonthIndex> = None;

    for month in sorted {
        current = match previous.and_then(MonthIndex::next) {
            Some(expected) if expected == month => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(month);
    }

    longest
}

/// Map a run length and limit to a status tier
///
/// - `limit == 0` (unclassified) or `run == 0`: [`ComplianceStatus::Unassigned`]
/// - `run >= limit`: [`ComplianceStatus::Danger`]
/// - `run == limit - 1`: [`ComplianceStatus::Warning`]
/// - otherwise: [`ComplianceStatus::Safe`]
///
/// The warning check is strict equality, so a limit of 1 goes straight from
/// unassigned to danger.
#[must_use]
pub const fn classify(run: usize, limit: usize) -> ComplianceStatus {
    if limit == 0 || run == 0 {
        ComplianceStatus::Unassigned
    } else if run >= limit {
        ComplianceStatus::Danger
    } else if run == limit - 1 {
        ComplianceStatus::Warning
    } else {
        ComplianceStatus::Safe
    }
}

/// Validate a proposed person-wide month set against a limit
///
/// `proposed_person_months` must be the full union across all of the person's
/// orders, not just the order being edited. Reaching the limit exactly is
/// allowed; only exceeding it fails.
///
/// # Returns
///
/// The longest run of the proposed set.
pub fn validate_assignment_change<I>(
    proposed_person_months: I,
    limit: usize,
) -> Result<usize, LimitExceeded>
where
    I: IntoIterator<Item = MonthIndex>,
{
    let run = longest_consecutive_run(proposed_person_months);
    if run > limit {
        log::debug!("rejecting assignment: run {run} > limit {limit}");
        return Err(LimitExceeded { run, limit });
    }
    Ok(run)
}

/// Evaluate a person's months under an optional classification
#[must_use]
pub fn evaluate<I>(months: I, classification: Option<Classification>) -> Evaluation
where
    I: IntoIterator<Item = MonthIndex>,
{
    let run = longest_consecutive_run(months);
    let limit = limit_for(classification);
    Evaluation {
        run,
        limit,
        status: classify(run, limit),
    }
}
