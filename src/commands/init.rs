//! Initialize monthwatch in a directory

use monthwatch::adapters::JsonStore;
use monthwatch::config::Config;
use monthwatch::core::models::Schedule;
use monthwatch::core::ports::{OrderRepository, ProviderRepository, ScheduleRepository};
use monthwatch::output::{OperationResult, OutputMode};
use monthwatch::paths;

/// Initialize monthwatch in the current directory
///
/// Existing orders, providers and assignments are never overwritten, even
/// with `--force`; only the config file is rewritten.
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let root = paths::project_root();
    let config_path = paths::config_toml(&root);

    if config_path.exists() && !force {
        OperationResult {
            success: false,
            message: "Already initialized (.monthwatch.toml exists).\nUse --force to reinitialize."
                .to_string(),
        }
        .render(mode);
        return Ok(());
    }

    let existing = Config::load(&root);
    existing.save(&root)?;

    let store = JsonStore::for_project(&root);
    store.ensure_dir()?;
    if store.load_orders()?.is_empty() {
        store.save_orders(&[])?;
    }
    if store.load_providers()?.is_empty() {
        store.save_providers(&[])?;
    }
    if store.load_schedule()?.is_empty() {
        store.save_schedule(&Schedule::new())?;
    }
    log::debug!("initialized {}", store.dir().display());

    OperationResult::ok(format!(
        "Initialized monthwatch for {}.\n  Created {}\n  Created {}/\n\nNext steps:\n  \
         monthwatch import orders.csv\n  \
         monthwatch provider add --ruc <RUC> --name <NAME> --contact <CONTACT> --type professional",
        existing.report.year,
        paths::CONFIG_TOML,
        paths::DATA_DIR,
    ))
    .render(mode);

    Ok(())
}
