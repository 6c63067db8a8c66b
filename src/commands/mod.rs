pub mod export;
pub mod init;
pub mod migrations;
pub mod search;
pub mod section;
pub mod task;

use crate::db::store::SqliteStore;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::registry::TaskRegistry;
use crate::libs::repository::TaskRepository;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create the configuration file")]
    Init(init::InitArgs),
    #[command(about = "Add, remove and list sections")]
    Section(section::SectionArgs),
    #[command(about = "Add, remove and list tasks")]
    Task(task::TaskArgs),
    #[command(about = "Find tasks by name")]
    Search(search::SearchArgs),
    #[command(about = "Export all tasks to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Inspect the database schema")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
            Commands::Section(args) => section::cmd(args, &mut Session::open()?),
            Commands::Task(args) => task::cmd(args, &mut Session::open()?),
            Commands::Search(args) => search::cmd(args, &Session::open()?),
            Commands::Export(args) => export::cmd(args, &Session::open()?),
        }
    }
}

/// Everything a command needs: the loaded registry and the display settings.
pub struct Session<R: TaskRepository> {
    pub registry: TaskRegistry<R>,
    pub config: Config,
}

impl Session<SqliteStore> {
    /// Reads the configuration and loads the registry from the configured database.
    pub fn open() -> Result<Self> {
        let storage = DataStorage::new();
        let config = Config::read_from(&storage)?;
        let store = SqliteStore::new(config.database_path(&storage)?);

        Ok(Session {
            registry: TaskRegistry::load(store),
            config,
        })
    }
}

impl<R: TaskRepository> Session<R> {
    /// A session over any repository, e.g. a store in a temporary directory.
    pub fn new(registry: TaskRegistry<R>, config: Config) -> Self {
        Session { registry, config }
    }
}

/// Trims a section or task name typed on the command line.
///
/// # Errors
///
/// Fails with `on_empty` when nothing but whitespace is left.
pub fn required_name(raw: &str, on_empty: Message) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        msg_bail_anyhow!(on_empty);
    }
    Ok(name.to_string())
}

/// Asks `prompt` as a yes/no question defaulting to no. `assume_yes` skips the prompt.
pub fn confirm(prompt: Message, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?;
    Ok(confirmed)
}
