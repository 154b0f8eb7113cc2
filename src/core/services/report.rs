//! Report generation
//!
//! Builds the consolidated per-person report, the availability summary,
//! the monthly analysis and the calendar overview. All functions are pure;
//! rendering and export live elsewhere.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::models::{
    Classification, ComplianceStatus, MonthIndex, Order, Person, Provider, Schedule,
};

use super::compliance::{Evaluation, evaluate};
use super::registry::classification_for;

/// One order in a consolidated row
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
    /// Order number
    pub number: String,
    /// SIAF code
    pub siaf: String,
    /// Amount
    pub amount: f64,
    /// Months assigned to this order
    pub months: Vec<MonthIndex>,
}

/// One consolidated row per person
#[derive(Debug, Clone, Serialize)]
pub struct ConsolidatedRow {
    /// Person name
    pub name: String,
    /// Taxpayer number
    pub ruc: String,
    /// Work area
    pub area: String,
    /// Registered classification
    pub classification: Option<Classification>,
    /// Total orders
    pub total_orders: usize,
    /// Orders with months
    pub assigned_orders: usize,
    /// Orders without months
    pub pending_orders: usize,
    /// Distinct months across all orders, ascending
    pub assigned_months: Vec<MonthIndex>,
    /// Longest consecutive run
    pub consecutive_months: usize,
    /// Classification limit (0 when unclassified)
    pub max_months: usize,
    /// Derived status
    pub status: ComplianceStatus,
    /// Status wording for operators
    pub status_text: String,
    /// Months left before the limit
    pub remaining_months: usize,
    /// Sum of all order amounts
    pub total_amount: f64,
    /// Per-order detail
    pub orders: Vec<OrderLine>,
}

impl ConsolidatedRow {
    /// Whether the row matches a search term (name, RUC, area, status text
    /// or any order number)
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let lower = term.to_lowercase();
        self.name.to_lowercase().contains(&lower)
            || self.ruc.contains(term)
            || self.area.to_lowercase().contains(&lower)
            || self.status_text.to_lowercase().contains(&lower)
            || self.orders.iter().any(|o| o.number.to_lowercase().contains(&lower))
    }
}

/// Operator wording for a person's status
#[must_use]
pub fn status_text(
    classification: Option<Classification>,
    eval: &Evaluation,
    has_months: bool,
) -> &'static str {
    if classification.is_none() {
        return "Not classified";
    }
    if !has_months {
        return "Not assigned";
    }
    match eval.status {
        ComplianceStatus::Danger => "Limit reached",
        ComplianceStatus::Warning => "Near limit",
        ComplianceStatus::Safe => "Available",
        ComplianceStatus::Unassigned => "Not assigned",
    }
}

/// Build the consolidated report
#[must_use]
pub fn consolidated(
    persons: &[Person],
    providers: &[Provider],
    schedule: &Schedule,
) -> Vec<ConsolidatedRow> {
    persons
        .iter()
        .map(|person| {
            let classification = classification_for(providers, person.ruc());
            let months: BTreeSet<MonthIndex> = person.months(schedule);
            let eval = evaluate(months.iter().copied(), classification);

            ConsolidatedRow {
                name: person.name().to_string(),
                ruc: person.ruc().to_string(),
                area: person.area.clone(),
                classification,
                total_orders: person.total_orders(),
                assigned_orders: person.assigned_orders,
                pending_orders: person.pending_orders,
                consecutive_months: eval.run,
                max_months: eval.limit,
                status: eval.status,
                status_text: status_text(classification, &eval, !months.is_empty()).to_string(),
                remaining_months: eval.remaining(),
                total_amount: person.total_amount(),
                assigned_months: months.into_iter().collect(),
                orders: person
                    .orders
                    .iter()
                    .map(|o| OrderLine {
                        number: o.number.clone(),
                        siaf: o.siaf.clone(),
                        amount: o.amount,
                        months: schedule.months(o.id).into_iter().collect(),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// A person placed in an availability bucket
#[derive(Debug, Clone, Serialize)]
pub struct SummaryEntry {
    /// Person name
    pub name: String,
    /// Taxpayer number
    pub ruc: String,
    /// Classification, if registered
    pub classification: Option<Classification>,
    /// Longest consecutive run
    pub consecutive_months: usize,
    /// Classification limit
    pub max_months: usize,
    /// Months left before the limit
    pub remaining_months: usize,
    /// Why the person is in this bucket
    pub reason: String,
}

/// Persons bucketed by availability
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    /// Classified and below the warning threshold (or nothing assigned yet)
    pub available: Vec<SummaryEntry>,
    /// One month short of the limit
    pub warning: Vec<SummaryEntry>,
    /// At the limit
    pub unavailable: Vec<SummaryEntry>,
    /// Provider not registered
    pub unassigned: Vec<SummaryEntry>,
}

/// Build the availability summary
#[must_use]
pub fn summary(persons: &[Person], providers: &[Provider], schedule: &Schedule) -> Summary {
    let mut result = Summary::default();

    for person in persons {
        let classification = classification_for(providers, person.ruc());
        let eval = evaluate(person.months(schedule), classification);

        let (bucket, reason) = match (classification, eval.status) {
            (None, _) => (&mut result.unassigned, "Provider not registered"),
            (Some(_), ComplianceStatus::Danger) => {
                (&mut result.unavailable, "Consecutive-month limit reached")
            },
            (Some(_), ComplianceStatus::Warning) => {
                (&mut result.warning, "Close to the consecutive-month limit")
            },
            (Some(_), ComplianceStatus::Safe | ComplianceStatus::Unassigned) => {
                (&mut result.available, "Within limit")
            },
        };

        bucket.push(SummaryEntry {
            name: person.name().to_string(),
            ruc: person.ruc().to_string(),
            classification,
            consecutive_months: eval.run,
            max_months: eval.limit,
            remaining_months: eval.remaining(),
            reason: reason.to_string(),
        });
    }

    result
}

/// Activity in a single month
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthlyAnalysis {
    /// The month analysed
    pub month: MonthIndex,
    /// Orders scheduled in the month
    pub orders: usize,
    /// Distinct RUCs with an order in the month
    pub providers: usize,
    /// Sum of amounts of those orders
    pub total_amount: f64,
}

/// Analyse one month across all orders
#[must_use]
pub fn monthly_analysis(
    orders: &[Order],
    schedule: &Schedule,
    month: MonthIndex,
) -> MonthlyAnalysis {
    let in_month: Vec<&Order> = orders.iter().filter(|o| schedule.contains(o.id, month)).collect();
    let providers: BTreeSet<&str> = in_month.iter().map(|o| o.ruc.as_str()).collect();

    MonthlyAnalysis {
        month,
        orders: in_month.len(),
        providers: providers.len(),
        total_amount: in_month.iter().map(|o| o.amount).sum(),
    }
}

/// An order as shown in the calendar overview
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEntry {
    /// Order number
    pub number: String,
    /// SIAF code
    pub siaf: String,
    /// Person name
    pub name: String,
    /// Work area
    pub area: String,
    /// Amount
    pub amount: f64,
}

/// Orders scheduled in one month
#[derive(Debug, Clone, Serialize)]
pub struct CalendarMonth {
    /// The month
    pub month: MonthIndex,
    /// Orders in the month
    pub entries: Vec<CalendarEntry>,
    /// Sum of amounts
    pub total_amount: f64,
}

/// Twelve-month overview of scheduled orders, for everyone or one person
#[must_use]
pub fn calendar(
    orders: &[Order],
    schedule: &Schedule,
    only: Option<&Person>,
) -> Vec<CalendarMonth> {
    let source: Vec<&Order> = only.map_or_else(
        || orders.iter().collect(),
        |person| person.orders.iter().collect(),
    );

    MonthIndex::all()
        .map(|month| {
            let entries: Vec<CalendarEntry> = source
                .iter()
                .filter(|o| schedule.contains(o.id, month))
                .map(|o| CalendarEntry {
                    number: o.number.clone(),
                    siaf: o.siaf.clone(),
                    name: o.name.clone(),
                    area: o.area.clone(),
                    amount: o.amount,
                })
                .collect();
            CalendarMonth {
                month,
                total_amount: entries.iter().map(|e| e.amount).sum(),
                entries,
            }
        })
        .collect()
}

/// Headline counts for the status command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overview {
    /// Distinct persons (RUC + name)
    pub persons: usize,
    /// Orders in the store
    pub orders: usize,
    /// Orders without months
    pub pending_orders: usize,
    /// Registered providers
    pub providers: usize,
}

/// Compute headline counts
#[must_use]
pub fn overview(persons: &[Person], providers: &[Provider]) -> Overview {
    Overview {
        persons: persons.len(),
        orders: persons.iter().map(Person::total_orders).sum(),
        pending_orders: persons.iter().map(|p| p.pending_orders).sum(),
        providers: providers.len(),
    }
}
