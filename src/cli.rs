//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use monthwatch::core::models::{Classification, MonthIndex};
use monthwatch::output::OutputMode;

/// monthwatch - Consecutive-month compliance for service providers
#[derive(Parser, Debug)]
#[command(
    name = "monthwatch",
    version,
    about = "Consecutive-month compliance for service providers",
    long_about = "Track service orders, schedule the months each order covers, and keep \
                  every provider within the consecutive-month limit of their classification.\n\n\
                  Professionals may work 6 consecutive months, technicians 12 and short-term \
                  technicians 3."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize monthwatch in the current directory
    Init {
        /// Force re-initialization (keeps stored data)
        #[arg(short, long)]
        force: bool,
    },

    /// Import orders from an .xlsx, .xls, .csv or .json file (or a directory of them)
    Import {
        /// File or directory to import
        file: PathBuf,
    },

    /// Manage the provider registry
    Provider {
        #[command(subcommand)]
        action: ProviderAction,
    },

    /// List people derived from orders, with their status
    People {
        /// Filter by name, RUC or area
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Edit or view month assignments
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },

    /// Generate reports
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Show current status (counts, people near or at their limit)
    Status,

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ProviderAction {
    /// Register a provider, or update the one with the same RUC
    Add {
        /// Taxpayer number (11 digits)
        #[arg(long)]
        ruc: String,

        /// Company or person name
        #[arg(long)]
        name: String,

        /// Contact person
        #[arg(long)]
        contact: String,

        /// Classification: professional, technician, technician-short
        #[arg(short = 't', long = "type", default_value = "professional")]
        classification: Classification,

        /// Free-form description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List registered providers
    List,

    /// Remove a provider
    Remove {
        /// Taxpayer number
        ruc: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScheduleAction {
    /// Toggle months on an order (adds are checked against the limit)
    Toggle {
        /// Order number
        order: String,

        /// Months: names (January, ene, ...) or numbers 1-12
        #[arg(required = true)]
        months: Vec<MonthIndex>,
    },

    /// Replace the months of an order (no months clears it)
    Set {
        /// Order number
        order: String,

        /// Months: names (January, ene, ...) or numbers 1-12
        months: Vec<MonthIndex>,
    },

    /// Show a person's schedule
    Show {
        /// Taxpayer number
        ruc: String,

        /// Name, when several people share the RUC
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Twelve-month overview of every scheduled order
    Calendar,
}

#[derive(Subcommand, Debug)]
pub enum ReportAction {
    /// One row per person with status and amounts
    Consolidated {
        /// Filter by name, RUC, area, status or order number
        #[arg(short, long)]
        search: Option<String>,

        /// Also export as CSV (default: consolidated_report_<date>.csv)
        #[arg(long, num_args = 0..=1, value_name = "FILE")]
        csv: Option<Option<PathBuf>>,
    },

    /// People bucketed into available, warning, unavailable and unassigned
    Summary,

    /// Orders, providers and amount scheduled in one month
    Month {
        /// Month name or number 1-12
        month: MonthIndex,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Import { file }) => commands::import(&file, output_mode),
        Some(Command::Provider { action }) => commands::provider_cmd(action, output_mode),
        Some(Command::People { search }) => commands::people(search.as_deref(), output_mode),
        Some(Command::Schedule { action }) => commands::schedule_cmd(action, output_mode),
        Some(Command::Report { action }) => commands::report_cmd(action, output_mode),
        Some(Command::Status) => commands::status(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": monthwatch::VERSION
                    })
                );
            } else {
                println!("monthwatch v{}", monthwatch::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": monthwatch::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("monthwatch v{}", monthwatch::VERSION);
                println!("\nRun 'monthwatch --help' for usage");
                println!("Run 'monthwatch init' to get started");
            }
            Ok(())
        },
    }
}
