//! Grouping orders into persons and merging imports
//!
//! A person is every order sharing a RUC and name. Grouping is recomputed from
//! the order list and schedule on demand rather than stored.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::core::models::{Order, OrderId, Person, PersonKey, Schedule};

/// Result of merging an import into the existing orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Orders that were new and got appended
    pub added: usize,
    /// Orders skipped because their number already existed
    pub duplicates: usize,
    /// Total orders after the merge
    pub total: usize,
}

/// Group orders by `(ruc, name)`, preserving first-seen order
///
/// Assigned/pending counts are taken from `schedule`.
#[must_use]
pub fn group_by_person(orders: &[Order], schedule: &Schedule) -> Vec<Person> {
    let mut index: HashMap<PersonKey, usize> = HashMap::new();
    let mut persons: Vec<Person> = Vec::new();

    for order in orders {
        let key = PersonKey {
            ruc: order.ruc.clone(),
            name: order.name.clone(),
        };

        let slot = *index.entry(key.clone()).or_insert_with(|| {
            persons.push(Person {
                key,
                area: order.area.clone(),
                orders: Vec::new(),
                assigned_orders: 0,
                pending_orders: 0,
            });
            persons.len() - 1
        });

        let person = &mut persons[slot];
        if schedule.is_assigned(order.id) {
            person.assigned_orders += 1;
        } else {
            person.pending_orders += 1;
        }
        person.orders.push(order.clone());
    }

    persons
}

/// Find the person that owns an order
#[must_use]
pub fn person_for_order(persons: &[Person], order: OrderId) -> Option<&Person> {
    persons.iter().find(|p| p.owns(order))
}

/// Why a RUC lookup did not yield exactly one person
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No person matched
    #[error("no person with RUC {0}")]
    NotFound(String),

    /// Several people share the RUC and no name narrowed it down
    #[error("ambiguous RUC {ruc}: shared by {}; pass --name", .names.join(", "))]
    Ambiguous {
        /// The RUC searched for
        ruc: String,
        /// Names of every matching person
        names: Vec<String>,
    },
}

/// Find a person by RUC, and by name when several share the RUC
pub fn find_person<'a>(
    persons: &'a [Person],
    ruc: &str,
    name: Option<&str>,
) -> Result<&'a Person, LookupError> {
    let matches: Vec<&Person> = persons
        .iter()
        .filter(|p| {
            p.ruc() == ruc && name.is_none_or(|n| p.name().eq_ignore_ascii_case(n.trim()))
        })
        .collect();

    match matches.as_slice() {
        [] => Err(LookupError::NotFound(ruc.to_string())),
        [person] => Ok(*person),
        _ => Err(LookupError::Ambiguous {
            ruc: ruc.to_string(),
            names: matches.iter().map(|p| p.name().to_string()).collect(),
        }),
    }
}

/// Append incoming orders whose number is not already present
///
/// New orders receive ids after the current maximum. Duplicates inside the
/// incoming batch are skipped too.
pub fn merge_orders(existing: &mut Vec<Order>, incoming: Vec<Order>) -> MergeOutcome {
    let mut seen: HashSet<String> = existing.iter().map(|o| o.number.clone()).collect();
    let mut next_id = existing.iter().map(|o| o.id).max().unwrap_or(0) + 1;
    let mut added = 0;
    let mut duplicates = 0;

    for mut order in incoming {
        if !seen.insert(order.number.clone()) {
            duplicates += 1;
            continue;
        }
        order.id = next_id;
        next_id += 1;
        existing.push(order);
        added += 1;
    }

    log::debug!("merged orders: {added} added, {duplicates} duplicates");

    MergeOutcome {
        added,
        duplicates,
        total: existing.len(),
    }
}
