use super::Session;
use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
        repository::TaskRepository,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file; defaults to a timestamped name in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Order by due date, then by priority
    #[arg(short, long)]
    sorted: bool,
}

/// Exports every task with its section name.
///
/// An empty registry is reported and no file is created.
pub fn cmd<R: TaskRepository>(args: ExportArgs, session: &Session<R>) -> Result<()> {
    let entries = if args.sorted {
        session.registry.sorted_entries()
    } else {
        session.registry.list_all_entries()
    };

    if entries.is_empty() {
        msg_info!(Message::ExportNothingToExport);
        return Ok(());
    }

    let path = Exporter::new(args.format, args.output).export(&entries)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
