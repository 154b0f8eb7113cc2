//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{Classification, ComplianceStatus, MonthIndex, Provider};
use crate::core::services::registry::RegistryRow;
use crate::core::services::report::{
    CalendarMonth, ConsolidatedRow, MonthlyAnalysis, Overview, Summary, SummaryEntry,
};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Coloured status badge
#[must_use]
pub fn badge(status: ComplianceStatus) -> ColoredString {
    let text = format!("[{status}]");
    let text = text.as_str();
    match status {
        ComplianceStatus::Unassigned => text.dimmed(),
        ComplianceStatus::Safe => text.green(),
        ComplianceStatus::Warning => text.yellow(),
        ComplianceStatus::Danger => text.red().bold(),
    }
}

/// Month names joined with commas, or `-` when empty
#[must_use]
pub fn month_list(months: &[MonthIndex]) -> String {
    if months.is_empty() {
        return "-".to_string();
    }
    months.iter().map(|m| m.name()).collect::<Vec<_>>().join(", ")
}

fn classification_label(classification: Option<Classification>) -> &'static str {
    classification.map_or("Not classified", Classification::label)
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Successful result with a message
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of an import
#[derive(Debug, Serialize)]
pub struct ImportResult {
    /// Imported path
    pub source: String,
    /// Rows read from the source
    pub read: usize,
    /// New orders stored
    pub added: usize,
    /// Orders skipped because their number was already stored
    pub duplicates: usize,
    /// Orders in the store afterwards
    pub total: usize,
}

impl ImportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Imported {} row(s) from {}", self.read, self.source);
                println!("  Added:      {}", self.added);
                println!("  Duplicates: {}", self.duplicates);
                println!("  Total:      {}", self.total);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of `provider list`
#[derive(Debug, Serialize)]
pub struct ProviderListResult {
    /// Registered providers
    pub providers: Vec<Provider>,
}

impl ProviderListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.providers.is_empty() {
            println!("No providers registered.");
            return;
        }

        println!("Providers:\n");
        for p in &self.providers {
            println!(
                "  {}  {}  [{}, max {} months]",
                p.ruc,
                p.name,
                p.classification.label(),
                p.limit()
            );
            println!("      Contact: {}", p.contact_person);
            if !p.description.is_empty() {
                println!("      {}", p.description);
            }
        }
    }
}

/// Result of `people`
#[derive(Debug, Serialize)]
pub struct PeopleResult {
    /// One row per person
    pub people: Vec<RegistryRow>,
}

impl PeopleResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.people.is_empty() {
            println!("No people found. Import orders with 'monthwatch import <FILE>'.");
            return;
        }

        for row in &self.people {
            println!("{} {}  {}", badge(row.status), row.name, row.ruc);
            println!(
                "    {} | {} | orders {} ({} assigned, {} pending) | run {}/{}",
                row.area,
                classification_label(row.classification),
                row.total_orders,
                row.assigned_orders,
                row.pending_orders,
                row.run,
                row.limit
            );
        }
        println!("\n{} person(s)", self.people.len());
    }
}

/// Months and status of one order
#[derive(Debug, Serialize)]
pub struct OrderMonths {
    /// Order number
    pub number: String,
    /// Assigned months
    pub months: Vec<MonthIndex>,
    /// Person-wide status, or `unassigned` when the order has no months
    pub status: ComplianceStatus,
}

/// A person's schedule after a change, or as stored
#[derive(Debug, Serialize)]
pub struct ScheduleResult {
    /// Person name
    pub name: String,
    /// Taxpayer number
    pub ruc: String,
    /// Classification, if registered
    pub classification: Option<Classification>,
    /// Person-wide status
    pub status: ComplianceStatus,
    /// Longest consecutive run across all orders
    pub consecutive_months: usize,
    /// Classification limit
    pub max_months: usize,
    /// Months left before the limit
    pub remaining_months: usize,
    /// Per-order months
    pub orders: Vec<OrderMonths>,
}

impl ScheduleResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{} {} ({})", badge(self.status), self.name, self.ruc);
        println!(
            "    {} | run {}/{} | {} month(s) remaining",
            classification_label(self.classification),
            self.consecutive_months,
            self.max_months,
            self.remaining_months
        );
        for order in &self.orders {
            println!("  {:<20} {}", order.number, month_list(&order.months));
        }
    }
}

/// Result of `schedule calendar`
#[derive(Debug, Serialize)]
pub struct CalendarResult {
    /// Currency prefix
    pub currency: String,
    /// Twelve months, January first
    pub months: Vec<CalendarMonth>,
}

impl CalendarResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        for month in &self.months {
            println!(
                "{:<10} {:>3} order(s)  {} {:.2}",
                month.month.name(),
                month.entries.len(),
                self.currency,
                month.total_amount
            );
            for entry in &month.entries {
                println!("    {}  {}  {}", entry.number, entry.name, entry.area);
            }
        }
    }
}

/// Result of `report consolidated`
#[derive(Debug, Serialize)]
pub struct ConsolidatedResult {
    /// Currency prefix
    pub currency: String,
    /// Report rows
    pub rows: Vec<ConsolidatedRow>,
    /// CSV file written, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported: Option<String>,
}

impl ConsolidatedResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.rows.is_empty() {
            println!("No matching people.");
        }

        for row in &self.rows {
            println!("{} {}  {}  {}", badge(row.status), row.name, row.ruc, row.status_text);
            println!(
                "    {} | {} | run {}/{} | {} remaining | {} {:.2}",
                row.area,
                classification_label(row.classification),
                row.consecutive_months,
                row.max_months,
                row.remaining_months,
                self.currency,
                row.total_amount
            );
            println!("    Months: {}", month_list(&row.assigned_months));
        }

        if let Some(path) = &self.exported {
            println!("\nExported to {path}");
        }
    }
}

/// Result of `report summary`
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    /// Bucketed persons
    #[serde(flatten)]
    pub summary: Summary,
}

impl SummaryResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let s = &self.summary;
        section("Available", &s.available);
        section("Warning", &s.warning);
        section("Unavailable", &s.unavailable);
        section("Unassigned", &s.unassigned);
    }
}

fn section(title: &str, entries: &[SummaryEntry]) {
    println!("{title} ({})", entries.len());
    for e in entries {
        println!(
            "  {}  {}  run {}/{}  {}",
            e.ruc, e.name, e.consecutive_months, e.max_months, e.reason
        );
    }
}

/// Result of `report month`
#[derive(Debug, Serialize)]
pub struct MonthlyResult {
    /// Currency prefix
    pub currency: String,
    /// Analysis of the month
    #[serde(flatten)]
    pub analysis: MonthlyAnalysis,
}

impl MonthlyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let a = &self.analysis;
                println!("{}", a.month.name());
                println!("  Orders:    {}", a.orders);
                println!("  Providers: {}", a.providers);
                println!("  Amount:    {} {:.2}", self.currency, a.total_amount);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of `status`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusResult {
    /// Whether `.monthwatch/` exists
    pub initialized: bool,
    /// Tracking year from config
    pub year: i32,
    /// Headline counts
    #[serde(flatten)]
    pub overview: Overview,
    /// Persons at the limit
    pub at_limit: usize,
    /// Persons one month short of the limit
    pub near_limit: usize,
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if !self.initialized {
            println!("Not initialized. Run 'monthwatch init' to get started.");
            return;
        }

        println!("monthwatch {}", self.year);
        println!("  People:         {}", self.overview.persons);
        println!(
            "  Orders:         {} ({} pending)",
            self.overview.orders, self.overview.pending_orders
        );
        println!("  Providers:      {}", self.overview.providers);
        println!("  Near limit:     {}", self.near_limit);
        println!("  At limit:       {}", self.at_limit);
    }
}
