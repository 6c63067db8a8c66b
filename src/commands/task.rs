use super::{confirm, required_name, Session};
use crate::{
    libs::{
        messages::Message,
        repository::TaskRepository,
        task::{Priority, Task},
        view::View,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a task to a section, creating the section if needed
    Add {
        /// Section name
        section: String,
        /// Task name
        name: String,
        /// low, moderate or high
        #[arg(short, long, default_value = "moderate")]
        priority: String,
        /// Due date as YYYY-MM-DD
        #[arg(short, long)]
        due: String,
    },
    /// Remove a task from a section
    Remove {
        /// Section name
        section: String,
        /// Task name; the oldest task with this name is removed
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List tasks of one section, or of all sections
    List {
        /// Only this section
        section: Option<String>,
        /// Order by due date, then by priority
        #[arg(short, long, conflicts_with = "section")]
        sorted: bool,
    },
}

/// Dispatches `task add|remove|list`.
///
/// # Arguments
///
/// * `args` - Parsed subcommand
/// * `session` - Loaded registry and display settings
///
/// # Returns
///
/// An error carrying a user-facing [`Message`] when input is invalid or the
/// store rejects the change.
pub fn cmd<R: TaskRepository>(args: TaskArgs, session: &mut Session<R>) -> Result<()> {
    match args.command {
        TaskCommand::Add {
            section,
            name,
            priority,
            due,
        } => handle_add(session, section, name, &priority, &due),
        TaskCommand::Remove { section, name, yes } => handle_remove(session, section, name, yes),
        TaskCommand::List { section, sorted } => handle_list(session, section, sorted),
    }
}

/// Priority from command-line text; case and surrounding spaces are ignored.
pub fn parse_priority(value: &str) -> Result<Priority> {
    value.parse().map_err(|_| msg_error_anyhow!(Message::InvalidPriority(value.to_string())))
}

/// Due date in `YYYY-MM-DD` form.
pub fn parse_due_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDueDate(value.to_string())))
}

fn handle_add<R: TaskRepository>(session: &mut Session<R>, section: String, name: String, priority: &str, due: &str) -> Result<()> {
    let section = required_name(&section, Message::SectionNameEmpty)?;
    let name = required_name(&name, Message::TaskNameEmpty)?;
    let task = Task::new(&name, parse_priority(priority)?, parse_due_date(due)?);

    if !session.registry.add_task(&section, task) {
        msg_bail_anyhow!(Message::TaskCreateFailed(name, section));
    }

    msg_success!(Message::TaskCreated(name, section));
    Ok(())
}

fn handle_remove<R: TaskRepository>(session: &mut Session<R>, section: String, name: String, yes: bool) -> Result<()> {
    let section = required_name(&section, Message::SectionNameEmpty)?;
    let name = required_name(&name, Message::TaskNameEmpty)?;

    if !session.registry.contains_section(&section) {
        msg_bail_anyhow!(Message::SectionNotFound(section));
    }

    let Some(task) = session.registry.list_tasks(&section).into_iter().find(|task| task.name == name) else {
        msg_bail_anyhow!(Message::TaskNotFound(name, section));
    };

    if !confirm(Message::ConfirmDeleteTask(name.clone(), section.clone()), yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if !session.registry.remove_task(&section, &task) {
        msg_bail_anyhow!(Message::TaskDeleteFailed(name, section));
    }

    msg_success!(Message::TaskDeleted(name, section));
    Ok(())
}

fn handle_list<R: TaskRepository>(session: &Session<R>, section: Option<String>, sorted: bool) -> Result<()> {
    let date_format = &session.config.date_format;

    if let Some(section) = section {
        if !session.registry.contains_section(&section) {
            msg_bail_anyhow!(Message::SectionNotFound(section));
        }

        let tasks = session.registry.list_tasks(&section);
        if tasks.is_empty() {
            msg_info!(Message::NoTasksInSection(section));
            return Ok(());
        }

        msg_print!(Message::TasksInSectionHeader(section), true);
        View::task_list(&tasks, date_format);
        return Ok(());
    }

    let (header, entries) = if sorted {
        (Message::TasksSortedHeader, session.registry.sorted_entries())
    } else {
        (Message::TasksHeader, session.registry.list_all_entries())
    };

    if entries.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(header, true);
    View::tasks(&entries, date_format);
    Ok(())
}
