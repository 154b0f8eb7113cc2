//! Report command - consolidated report, summary, monthly analysis

use std::path::PathBuf;

use monthwatch::core::models::MonthIndex;
use monthwatch::core::services::report::{consolidated, monthly_analysis, summary};
use monthwatch::export;
use monthwatch::output::{ConsolidatedResult, MonthlyResult, OutputMode, SummaryResult};

use super::Project;
use crate::cli::ReportAction;

/// Handle report subcommands
pub fn report_cmd(action: ReportAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ReportAction::Consolidated { search, csv } => {
            consolidated_report(search.as_deref(), csv, mode)
        },
        ReportAction::Summary => summary_report(mode),
        ReportAction::Month { month } => month_report(month, mode),
    }
}

fn consolidated_report(
    search: Option<&str>,
    csv: Option<Option<PathBuf>>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let project = Project::open()?;
    let snapshot = project.snapshot()?;
    let currency = project.config.report.currency.clone();

    let mut rows = consolidated(&snapshot.persons, &snapshot.providers, &snapshot.schedule);
    if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
        rows.retain(|row| row.matches(term));
    }

    let exported = match csv {
        Some(path) => {
            let path = path.unwrap_or_else(export::default_file_name);
            let written = export::export_consolidated(&rows, &currency, &path)?;
            Some(written.display().to_string())
        },
        None => None,
    };

    ConsolidatedResult {
        currency,
        rows,
        exported,
    }
    .render(mode);
    Ok(())
}

fn summary_report(mode: OutputMode) -> anyhow::Result<()> {
    let project = Project::open()?;
    let snapshot = project.snapshot()?;

    SummaryResult {
        summary: summary(&snapshot.persons, &snapshot.providers, &snapshot.schedule),
    }
    .render(mode);
    Ok(())
}

fn month_report(month: MonthIndex, mode: OutputMode) -> anyhow::Result<()> {
    let project = Project::open()?;
    let snapshot = project.snapshot()?;

    MonthlyResult {
        currency: project.config.report.currency.clone(),
        analysis: monthly_analysis(&snapshot.orders, &snapshot.schedule, month),
    }
    .render(mode);
    Ok(())
}
