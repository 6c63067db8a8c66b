//! Display implementation for taskbox messages.
//!
//! All user-facing wording is defined here, in one match, so the rest of the
//! code only ever talks in terms of [`Message`] variants.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SECTION MESSAGES ===
            Message::SectionCreated(name) => format!("Section '{}' created", name),
            Message::SectionAlreadyExists(name) => format!("Section '{}' already exists", name),
            Message::SectionCreateFailed(name) => format!("Failed to create section '{}'", name),
            Message::SectionDeleted(name) => format!("Section '{}' deleted together with its tasks", name),
            Message::SectionDeleteFailed(name) => format!("Failed to delete section '{}'", name),
            Message::SectionNotFound(name) => format!("Section '{}' not found", name),
            Message::SectionsHeader => "Sections:".to_string(),
            Message::NoSectionsFound => "No sections yet. Create one with `taskbox section add <name>`.".to_string(),
            Message::ConfirmDeleteSection(name, 0) => format!("Delete section '{}'?", name),
            Message::ConfirmDeleteSection(name, count) => {
                format!("Delete section '{}' and its {} task(s)? This cannot be undone.", name, count)
            }
            Message::SectionNameEmpty => "Section name cannot be empty".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(task, section) => format!("Task '{}' added to '{}'", task, section),
            Message::TaskCreateFailed(task, section) => format!("Failed to add task '{}' to '{}'", task, section),
            Message::TaskDeleted(task, section) => format!("Task '{}' removed from '{}'", task, section),
            Message::TaskDeleteFailed(task, section) => {
                format!("Failed to remove task '{}' from '{}'", task, section)
            }
            Message::TaskNotFound(task, section) => format!("Task '{}' not found in '{}'", task, section),
            Message::TaskNameEmpty => "Task name cannot be empty".to_string(),
            Message::ConfirmDeleteTask(task, section) => format!("Delete task '{}' from section '{}'?", task, section),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TasksInSectionHeader(section) => format!("Tasks in '{}':", section),
            Message::TasksSortedHeader => "Tasks by due date and priority:".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NoTasksInSection(section) => format!("No tasks in '{}'", section),
            Message::InvalidPriority(value) => format!("Unknown priority '{}', expected low, moderate or high", value),
            Message::InvalidDueDate(value) => format!("Invalid due date '{}', expected YYYY-MM-DD", value),

            // === SEARCH MESSAGES ===
            Message::SearchResultsHeader(term) => format!("Tasks matching '{}':", term),
            Message::SearchTermEmpty => "Please enter a search term.".to_string(),
            Message::SearchNoMatches(term) => format!("No tasks match '{}'", term),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(target) => format!("Tasks exported to {}", target),
            Message::ExportNothingToExport => "Nothing to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigParseError(err) => format!("Failed to parse configuration: {}", err),
            Message::PromptDateFormat => "Due date display format (chrono pattern)".to_string(),
            Message::PromptDatabasePath => "Database file (leave empty for the default location)".to_string(),

            // === DATABASE / MIGRATION MESSAGES ===
            Message::DbVersion(version) => format!("Database schema version: {}", version),
            Message::DbUpToDate => "Database is up to date".to_string(),
            Message::DbNeedsMigration(current, latest) => format!("Database needs migration from v{} to v{}", current, latest),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, err) => format!("Migration v{} failed: {}", version, err),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::MigrationHistoryHeader => "Migration history:".to_string(),

            // === GENERIC ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_delete_mentions_task_count_only_when_non_empty() {
        let empty = Message::ConfirmDeleteSection("Home".into(), 0).to_string();
        let full = Message::ConfirmDeleteSection("Work".into(), 3).to_string();

        assert_eq!(empty, "Delete section 'Home'?");
        assert!(full.contains("3 task(s)"));
    }
}
