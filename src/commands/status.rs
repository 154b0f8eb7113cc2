//! Status command - show an overview of the tracked state

use monthwatch::adapters::JsonStore;
use monthwatch::config::Config;
use monthwatch::core::models::ComplianceStatus;
use monthwatch::core::services::report::overview;
use monthwatch::core::services::{classification_for, evaluate};
use monthwatch::output::{OutputMode, StatusResult};
use monthwatch::paths;

use super::Project;

/// Show current monthwatch status
///
/// Works before `init` too, reporting that nothing is tracked yet.
pub fn status(mode: OutputMode) -> anyhow::Result<()> {
    let root = paths::project_root();
    let config = Config::load(&root);

    if !JsonStore::for_project(&root).exists() {
        StatusResult {
            initialized: false,
            year: config.report.year,
            overview: overview(&[], &[]),
            at_limit: 0,
            near_limit: 0,
        }
        .render(mode);
        return Ok(());
    }

    let snapshot = Project::open()?.snapshot()?;
    let statuses: Vec<ComplianceStatus> = snapshot
        .persons
        .iter()
        .map(|p| {
            let classification = classification_for(&snapshot.providers, p.ruc());
            evaluate(p.months(&snapshot.schedule), classification).status
        })
        .collect();

    StatusResult {
        initialized: true,
        year: config.report.year,
        overview: overview(&snapshot.persons, &snapshot.providers),
        at_limit: statuses.iter().filter(|s| **s == ComplianceStatus::Danger).count(),
        near_limit: statuses.iter().filter(|s| **s == ComplianceStatus::Warning).count(),
    }
    .render(mode);
    Ok(())
}
