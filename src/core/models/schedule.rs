//! Committed month assignments
//!
//! Maps each order to the set of months it is scheduled in. Orders with no
//! months are simply absent.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{MonthIndex, OrderId};

type Assignments = BTreeMap<OrderId, BTreeSet<MonthIndex>>;

/// Month assignments per order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Assignments", into = "Assignments")]
pub struct Schedule {
    assignments: Assignments,
}

impl From<Assignments> for Schedule {
    fn from(mut assignments: Assignments) -> Self {
        assignments.retain(|_, months| !months.is_empty());
        Self { assignments }
    }
}

impl From<Schedule> for Assignments {
    fn from(schedule: Schedule) -> Self {
        schedule.assignments
    }
}

impl Schedule {
    /// Create an empty schedule
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assignments: BTreeMap::new(),
        }
    }

    /// Months assigned to an order (empty if none)
    #[must_use]
    pub fn months(&self, order: OrderId) -> BTreeSet<MonthIndex> {
        self.assignments.get(&order).cloned().unwrap_or_default()
    }

    /// Whether an order has at least one month
    #[must_use]
    pub fn is_assigned(&self, order: OrderId) -> bool {
        self.assignments.get(&order).is_some_and(|m| !m.is_empty())
    }

    /// Whether an order is scheduled in the given month
    #[must_use]
    pub fn contains(&self, order: OrderId, month: MonthIndex) -> bool {
        self.assignments.get(&order).is_some_and(|m| m.contains(&month))
    }

    /// Replace the months of an order; an empty set removes the entry
    pub fn set(&mut self, order: OrderId, months: BTreeSet<MonthIndex>) {
        if months.is_empty() {
            self.assignments.remove(&order);
        } else {
            self.assignments.insert(order, months);
        }
    }

    /// Iterate `(order, months)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (OrderId, &BTreeSet<MonthIndex>)> {
        self.assignments.iter().map(|(id, months)| (*id, months))
    }

    /// Number of orders with at least one month
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no order has any month
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
