//! People command - the personnel registry view

use monthwatch::core::services::registry_rows;
use monthwatch::output::{OutputMode, PeopleResult};

use super::Project;

/// List people derived from orders, optionally filtered
pub fn people(search: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let project = Project::open()?;
    let snapshot = project.snapshot()?;

    let search = search.map(str::trim).filter(|s| !s.is_empty());
    let rows = registry_rows(&snapshot.persons, &snapshot.providers, &snapshot.schedule, search);

    PeopleResult { people: rows }.render(mode);
    Ok(())
}
