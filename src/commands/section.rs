use super::{confirm, required_name, Session};
use crate::{
    libs::{messages::Message, repository::TaskRepository, view::View},
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SectionArgs {
    #[command(subcommand)]
    command: SectionCommand,
}

#[derive(Debug, Subcommand)]
enum SectionCommand {
    /// Create a new section
    Add {
        /// Section name
        name: String,
    },
    /// Delete a section and all of its tasks
    Remove {
        /// Section name
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List sections in creation order
    List,
}

/// Dispatches `section add|remove|list`.
///
/// Names are trimmed; a blank name is rejected before the registry is touched.
pub fn cmd<R: TaskRepository>(args: SectionArgs, session: &mut Session<R>) -> Result<()> {
    match args.command {
        SectionCommand::Add { name } => handle_add(session, name),
        SectionCommand::Remove { name, yes } => handle_remove(session, name, yes),
        SectionCommand::List => handle_list(session),
    }
}

fn handle_add<R: TaskRepository>(session: &mut Session<R>, name: String) -> Result<()> {
    let name = required_name(&name, Message::SectionNameEmpty)?;

    if session.registry.contains_section(&name) {
        msg_info!(Message::SectionAlreadyExists(name));
        return Ok(());
    }

    if !session.registry.add_section(&name) {
        msg_bail_anyhow!(Message::SectionCreateFailed(name));
    }

    msg_success!(Message::SectionCreated(name));
    Ok(())
}

fn handle_remove<R: TaskRepository>(session: &mut Session<R>, name: String, yes: bool) -> Result<()> {
    let name = required_name(&name, Message::SectionNameEmpty)?;
    if !session.registry.contains_section(&name) {
        msg_bail_anyhow!(Message::SectionNotFound(name));
    }

    let task_count = session.registry.list_tasks(&name).len();
    if !confirm(Message::ConfirmDeleteSection(name.clone(), task_count), yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if !session.registry.remove_section(&name) {
        msg_bail_anyhow!(Message::SectionDeleteFailed(name));
    }

    msg_success!(Message::SectionDeleted(name));
    Ok(())
}

fn handle_list<R: TaskRepository>(session: &Session<R>) -> Result<()> {
    let names = session.registry.list_section_names();
    if names.is_empty() {
        msg_info!(Message::NoSectionsFound);
        return Ok(());
    }

    let rows: Vec<(String, usize)> = names
        .into_iter()
        .map(|name| {
            let count = session.registry.list_tasks(&name).len();
            (name, count)
        })
        .collect();

    msg_print!(Message::SectionsHeader, true);
    View::sections(&rows);
    Ok(())
}
