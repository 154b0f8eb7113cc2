//! Provider registry logic
//!
//! Upserts keyed by RUC, classification lookups, and the per-person
//! registry rows shown by the `people` command.

use serde::Serialize;

use crate::core::models::{Classification, ComplianceStatus, Person, Provider, Schedule};

use super::compliance::evaluate;

/// Whether an upsert created or replaced a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new RUC was registered
    Created,
    /// An existing RUC was updated
    Updated,
}

/// One row of the personnel registry
#[derive(Debug, Clone, Serialize)]
pub struct RegistryRow {
    /// Person name
    pub name: String,
    /// Taxpayer number
    pub ruc: String,
    /// Work area
    pub area: String,
    /// Classification, if the RUC is registered
    pub classification: Option<Classification>,
    /// Consecutive-month limit (0 when unclassified)
    pub limit: usize,
    /// Total orders
    pub total_orders: usize,
    /// Orders with months assigned
    pub assigned_orders: usize,
    /// Orders without months
    pub pending_orders: usize,
    /// Longest consecutive run
    pub run: usize,
    /// Status badge
    pub status: ComplianceStatus,
}

/// Insert a provider, replacing any existing entry with the same RUC
///
/// A replaced entry keeps its original `created_at`.
pub fn upsert(providers: &mut Vec<Provider>, mut provider: Provider) -> Upsert {
    if let Some(existing) = providers.iter_mut().find(|p| p.ruc == provider.ruc) {
        provider.created_at = std::mem::take(&mut existing.created_at);
        *existing = provider;
        Upsert::Updated
    } else {
        providers.push(provider);
        Upsert::Created
    }
}

/// Remove a provider by RUC, returning whether it existed
pub fn remove(providers: &mut Vec<Provider>, ruc: &str) -> bool {
    let before = providers.len();
    providers.retain(|p| p.ruc != ruc);
    providers.len() < before
}

/// Classification registered for a RUC
#[must_use]
pub fn classification_for(providers: &[Provider], ruc: &str) -> Option<Classification> {
    providers.iter().find(|p| p.ruc == ruc).map(|p| p.classification)
}

/// Whether a person matches a registry search term
///
/// Name and area match case-insensitively; RUC matches as a substring.
#[must_use]
pub fn matches_search(person: &Person, term: &str) -> bool {
    let lower = term.to_lowercase();
    person.name().to_lowercase().contains(&lower)
        || person.ruc().contains(term)
        || person.area.to_lowercase().contains(&lower)
}

/// Build registry rows for every person matching `search`
#[must_use]
pub fn registry_rows(
    persons: &[Person],
    providers: &[Provider],
    schedule: &Schedule,
    search: Option<&str>,
) -> Vec<RegistryRow> {
    persons
        .iter()
        .filter(|p| search.is_none_or(|term| matches_search(p, term)))
        .map(|person| {
            let classification = classification_for(providers, person.ruc());
            let eval = evaluate(person.months(schedule), classification);
            RegistryRow {
                name: person.name().to_string(),
                ruc: person.ruc().to_string(),
                area: person.area.clone(),
                classification,
                limit: eval.limit,
                total_orders: person.total_orders(),
                assigned_orders: person.assigned_orders,
                pending_orders: person.pending_orders,
                run: eval.run,
                status: eval.status,
            }
        })
        .collect()
}
