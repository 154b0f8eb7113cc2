//! Transactional schedule editing for one person
//!
//! A [`ScheduleDraft`] copies a person's committed assignments, accepts
//! month toggles that are validated against the person-wide consecutive
//! limit, and writes back to the [`Schedule`] only on [`ScheduleDraft::commit`].

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::core::models::{
    Classification, ComplianceStatus, MonthIndex, OrderId, Person, Schedule, limit_for,
};

use super::compliance::{Evaluation, LimitExceeded, evaluate, validate_assignment_change};

/// Errors raised while editing a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The change would push the person over their classification limit
    #[error(
        "limit exceeded: {classification} providers cannot work more than {limit} consecutive months (proposed run: {run})"
    )]
    LimitExceeded {
        /// Classification of the person
        classification: Classification,
        /// Its consecutive-month limit
        limit: usize,
        /// Run the change would have produced
        run: usize,
    },

    /// The order does not belong to the person being edited
    #[error("order {0} does not belong to this person")]
    UnknownOrder(OrderId),
}

/// What a successful toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The month was added to the order
    Added,
    /// The month was removed from the order
    Removed,
}

/// Pending assignment changes for a single person
#[derive(Debug, Clone)]
pub struct ScheduleDraft {
    classification: Option<Classification>,
    orders: BTreeMap<OrderId, BTreeSet<MonthIndex>>,
}

impl ScheduleDraft {
    /// Open a draft from the committed schedule
    #[must_use]
    pub fn begin(
        person: &Person,
        classification: Option<Classification>,
        schedule: &Schedule,
    ) -> Self {
        let orders = person.orders.iter().map(|o| (o.id, schedule.months(o.id))).collect();
        Self {
            classification,
            orders,
        }
    }

    /// Classification the draft is validated against
    #[must_use]
    pub const fn classification(&self) -> Option<Classification> {
        self.classification
    }

    /// Months of one order in the draft
    #[must_use]
    pub fn months(&self, order: OrderId) -> Option<&BTreeSet<MonthIndex>> {
        self.orders.get(&order)
    }

    /// Union of months across all the person's orders in the draft
    #[must_use]
    pub fn person_months(&self) -> BTreeSet<MonthIndex> {
        self.orders.values().flatten().copied().collect()
    }

    /// Add or remove one month on one order
    ///
    /// Additions are validated against the classification limit using the
    /// person-wide union. Removals never fail. On error the draft is
    /// unchanged.
    pub fn toggle(&mut self, order: OrderId, month: MonthIndex) -> Result<Toggle, ScheduleError> {
        let current = self.orders.get(&order).ok_or(ScheduleError::UnknownOrder(order))?;

        let mut proposed = current.clone();
        let toggle = if proposed.remove(&month) {
            Toggle::Removed
        } else {
            proposed.insert(month);
            Toggle::Added
        };

        if toggle == Toggle::Added {
            self.check(order, &proposed)?;
        }

        self.orders.insert(order, proposed);
        Ok(toggle)
    }

    /// Replace the months of one order
    ///
    /// Validated like [`toggle`](Self::toggle) whenever the replacement adds
    /// a month the order did not have.
    pub fn set(
        &mut self,
        order: OrderId,
        months: BTreeSet<MonthIndex>,
    ) -> Result<(), ScheduleError> {
        let current = self.orders.get(&order).ok_or(ScheduleError::UnknownOrder(order))?;

        if !months.is_subset(current) {
            self.check(order, &months)?;
        }

        self.orders.insert(order, months);
        Ok(())
    }

    /// Evaluation of the person under the draft
    #[must_use]
    pub fn evaluation(&self) -> Evaluation {
        evaluate(self.person_months(), self.classification)
    }

    /// Status of one order: unassigned if it has no months, otherwise the
    /// person-wide status
    #[must_use]
    pub fn order_status(&self, order: OrderId) -> ComplianceStatus {
        match self.orders.get(&order) {
            Some(months) if !months.is_empty() => self.evaluation().status,
            _ => ComplianceStatus::Unassigned,
        }
    }

    /// Write the draft back into the schedule
    pub fn commit(self, schedule: &mut Schedule) {
        for (order, months) in self.orders {
            schedule.set(order, months);
        }
    }

    fn check(
        &self,
        order: OrderId,
        replacement: &BTreeSet<MonthIndex>,
    ) -> Result<(), ScheduleError> {
        let Some(classification) = self.classification else {
            // Unclassified persons are never evaluated for consecutiveness
            return Ok(());
        };

        let union = self
            .orders
            .iter()
            .filter(|(id, _)| **id != order)
            .flat_map(|(_, months)| months.iter().copied())
            .chain(replacement.iter().copied());

        validate_assignment_change(union, limit_for(Some(classification))).map_err(
            |LimitExceeded { run, limit }| ScheduleError::LimitExceeded {
                classification,
                limit,
                run,
            },
        )?;
        Ok(())
    }
}
