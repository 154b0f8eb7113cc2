//! Consolidated report export
//!
//! Writes the consolidated report as a spreadsheet-friendly CSV: UTF-8 BOM,
//! `;` delimiter, one row per person.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::services::report::ConsolidatedRow;

/// Column headers, in order
pub const HEADERS: [&str; 15] = [
    "Light",
    "Name",
    "RUC",
    "Area",
    "Classification",
    "Total orders",
    "Assigned orders",
    "Pending orders",
    "Months worked",
    "Consecutive months",
    "Max limit",
    "Remaining months",
    "Status",
    "Total amount",
    "Order detail",
];

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Default export file name for today
#[must_use]
pub fn default_file_name() -> PathBuf {
    let today = chrono::Local::now().format("%Y-%m-%d");
    PathBuf::from(format!("consolidated_report_{today}.csv"))
}

/// Write the consolidated report to `out`
pub fn write_consolidated_csv<W: Write>(
    rows: &[ConsolidatedRow],
    currency: &str,
    mut out: W,
) -> Result<(), csv::Error> {
    out.write_all(BOM)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(HEADERS)?;
    for row in rows {
        writer.write_record(record(row, currency))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the consolidated report to a file, returning the path written
pub fn export_consolidated(
    rows: &[ConsolidatedRow],
    currency: &str,
    path: &Path,
) -> anyhow::Result<PathBuf> {
    let file = File::create(path)?;
    write_consolidated_csv(rows, currency, BufWriter::new(file))?;
    log::info!("exported {} rows to {}", rows.len(), path.display());
    Ok(path.to_path_buf())
}

fn record(row: &ConsolidatedRow, currency: &str) -> Vec<String> {
    let months: Vec<&str> = row.assigned_months.iter().map(|m| m.name()).collect();
    let detail: Vec<String> = row
        .orders
        .iter()
        .map(|o| format!("{} ({}) - {currency} {:.2}", o.number, o.siaf, o.amount))
        .collect();

    vec![
        row.status.light().to_string(),
        row.name.clone(),
        row.ruc.clone(),
        row.area.clone(),
        row.classification.map_or_else(|| "Not classified".to_string(), |c| c.label().to_string()),
        row.total_orders.to_string(),
        row.assigned_orders.to_string(),
        row.pending_orders.to_string(),
        months.join("; "),
        row.consecutive_months.to_string(),
        row.max_months.to_string(),
        row.remaining_months.to_string(),
        row.status_text.clone(),
        format!("{currency} {:.2}", row.total_amount),
        detail.join("; "),
    ]
}
