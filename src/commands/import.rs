//! Import command - ingest order spreadsheets

use std::path::Path;

use monthwatch::core::ports::OrderRepository;
use monthwatch::core::services::merge_orders;
use monthwatch::ingest::Importer;
use monthwatch::output::{ImportResult, OutputMode};

use super::Project;

/// Import a spreadsheet (or a directory of them) into the order store
///
/// Orders whose number is already stored are skipped.
pub fn import(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let project = Project::open()?;
    let importer = Importer::new(&project.config.ingest);

    let incoming = importer.import_path(path)?;
    let read = incoming.len();

    let mut orders = project.store.load_orders()?;
    let outcome = merge_orders(&mut orders, incoming);
    project.store.save_orders(&orders)?;

    ImportResult {
        source: path.display().to_string(),
        read,
        added: outcome.added,
        duplicates: outcome.duplicates,
        total: outcome.total,
    }
    .render(mode);

    Ok(())
}
