//! Person model
//!
//! A person is derived from orders: all orders sharing the same RUC and name.

use std::collections::BTreeSet;

use serde::Serialize;

use super::{MonthIndex, Order, OrderId, Schedule};

/// Identity of a person: RUC plus name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PersonKey {
    /// Taxpayer number
    pub ruc: String,
    /// Name as written on the orders
    pub name: String,
}

impl std::fmt::Display for PersonKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.ruc, self.name)
    }
}

/// A person and their orders
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    /// Identity
    pub key: PersonKey,
    /// Area of the first order seen
    pub area: String,
    /// Orders in ingestion order
    pub orders: Vec<Order>,
    /// Orders with at least one assigned month
    pub assigned_orders: usize,
    /// Orders with no assigned month
    pub pending_orders: usize,
}

impl Person {
    /// Taxpayer number
    #[must_use]
    pub fn ruc(&self) -> &str {
        &self.key.ruc
    }

    /// Name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.key.name
    }

    /// Total number of orders
    #[must_use]
    pub fn total_orders(&self) -> usize {
        self.orders.len()
    }

    /// Whether the order belongs to this person
    #[must_use]
    pub fn owns(&self, order: OrderId) -> bool {
        self.orders.iter().any(|o| o.id == order)
    }

    /// Union of the months assigned to any of this person's orders
    #[must_use]
    pub fn months(&self, schedule: &Schedule) -> BTreeSet<MonthIndex> {
        self.orders.iter().flat_map(|o| schedule.months(o.id)).collect()
    }

    /// Sum of all order amounts
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.orders.iter().map(|o| o.amount).sum()
    }
}
