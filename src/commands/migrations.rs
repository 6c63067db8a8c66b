use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::{config::Config, data_storage::DataStorage, messages::Message, view::View},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status,
    /// Show migration history
    History,
}

/// Reads schema state without migrating, so an outdated database shows as such.
pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let storage = DataStorage::new();
    let path = Config::read_from(&storage)?.database_path(&storage)?;
    let conn = Db::open_without_migrations(path)?;

    match args.command {
        MigrationsCommand::Status => {
            let version = get_db_version(&conn)?;

            msg_print!(Message::DbVersion(version));
            if needs_migration(&conn)? {
                msg_warning!(Message::DbNeedsMigration(version, MigrationManager::new().latest_version()));
            } else {
                msg_info!(Message::DbUpToDate);
            }
        }
        MigrationsCommand::History => {
            let history = MigrationManager::new().get_migration_history(&conn)?;

            msg_print!(Message::MigrationHistoryHeader, true);
            View::migrations(&history);
        }
    }

    Ok(())
}
