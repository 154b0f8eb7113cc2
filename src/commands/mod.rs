//! Command implementations

mod import;
mod init;
mod people;
mod provider;
mod report;
mod schedule;
mod status;

pub use import::import;
pub use init::init;
pub use people::people;
pub use provider::provider_cmd;
pub use report::report_cmd;
pub use schedule::schedule_cmd;
pub use status::status;

use anyhow::bail;

use monthwatch::adapters::JsonStore;
use monthwatch::config::Config;
use monthwatch::core::models::{Order, Person, Provider, Schedule};
use monthwatch::core::ports::{OrderRepository, ProviderRepository, ScheduleRepository};
use monthwatch::core::services::group_by_person;
use monthwatch::paths;

/// An initialized project: its config and store
struct Project {
    config: Config,
    store: JsonStore,
}

impl Project {
    /// Open the project in the working directory
    fn open() -> anyhow::Result<Self> {
        let root = paths::project_root();
        let store = JsonStore::for_project(&root);
        if !store.exists() {
            bail!("not initialized: run 'monthwatch init' first");
        }
        Ok(Self {
            config: Config::load(&root),
            store,
        })
    }

    /// Load orders, providers and schedule in one go
    fn snapshot(&self) -> anyhow::Result<Snapshot> {
        let orders = self.store.load_orders()?;
        let providers = self.store.load_providers()?;
        let schedule = self.store.load_schedule()?;
        let persons = group_by_person(&orders, &schedule);
        Ok(Snapshot {
            orders,
            providers,
            schedule,
            persons,
        })
    }
}

/// Everything a read-only command needs
struct Snapshot {
    orders: Vec<Order>,
    providers: Vec<Provider>,
    schedule: Schedule,
    persons: Vec<Person>,
}
