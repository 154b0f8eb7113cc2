//! Provider command - manage the provider registry

use anyhow::bail;

use monthwatch::core::models::{Classification, Provider};
use monthwatch::core::ports::ProviderRepository;
use monthwatch::core::services::Upsert;
use monthwatch::core::services::registry;
use monthwatch::output::{OperationResult, OutputMode, ProviderListResult};

use super::Project;
use crate::cli::ProviderAction;

/// Handle provider subcommands
pub fn provider_cmd(action: ProviderAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ProviderAction::Add {
            ruc,
            name,
            contact,
            classification,
            description,
        } => add(&ruc, &name, &contact, classification, &description, mode),
        ProviderAction::List => list(mode),
        ProviderAction::Remove { ruc } => remove(&ruc, mode),
    }
}

fn add(
    ruc: &str,
    name: &str,
    contact: &str,
    classification: Classification,
    description: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let provider = Provider::new(ruc, name, contact, classification, description)?;
    let project = Project::open()?;

    let mut providers = project.store.load_providers()?;
    let ruc = provider.ruc.clone();
    let outcome = registry::upsert(&mut providers, provider);
    project.store.save_providers(&providers)?;

    let verb = match outcome {
        Upsert::Created => "Registered",
        Upsert::Updated => "Updated",
    };
    OperationResult::ok(format!(
        "{verb} provider {ruc} as {} (max {} consecutive months)",
        classification.label(),
        classification.max_consecutive_months()
    ))
    .render(mode);

    Ok(())
}

fn list(mode: OutputMode) -> anyhow::Result<()> {
    let project = Project::open()?;
    let mut providers = project.store.load_providers()?;
    providers.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    ProviderListResult { providers }.render(mode);
    Ok(())
}

fn remove(ruc: &str, mode: OutputMode) -> anyhow::Result<()> {
    let project = Project::open()?;
    let mut providers = project.store.load_providers()?;

    if !registry::remove(&mut providers, ruc.trim()) {
        bail!("provider not found: {ruc}");
    }
    project.store.save_providers(&providers)?;

    OperationResult::ok(format!("Removed provider {ruc}")).render(mode);
    Ok(())
}
