use super::task::Task;
use crate::db::migrations::AppliedMigration;
use chrono::NaiveDate;
use prettytable::{row, Table};
use std::fmt::Write;

/// Terminal tables for sections and tasks.
pub struct View {}

impl View {
    /// One row per `(section, task)` entry. Dates use `date_format` (a `chrono` pattern).
    pub fn tasks(entries: &[(String, Task)], date_format: &str) {
        let mut table = Table::new();

        table.add_row(row!["#", "SECTION", "NAME", "PRIORITY", "DUE"]);
        for (index, (section, task)) in entries.iter().enumerate() {
            table.add_row(row![index + 1, section, task.name, task.priority, format_date(task.due_date, date_format)]);
        }
        table.printstd();
    }

    /// Tasks without a section column, e.g. one section or search results.
    pub fn task_list(tasks: &[Task], date_format: &str) {
        let mut table = Table::new();

        table.add_row(row!["#", "NAME", "PRIORITY", "DUE"]);
        for (index, task) in tasks.iter().enumerate() {
            table.add_row(row![index + 1, task.name, task.priority, format_date(task.due_date, date_format)]);
        }
        table.printstd();
    }

    /// Section names with their task counts.
    pub fn sections(sections: &[(String, usize)]) {
        let mut table = Table::new();

        table.add_row(row!["SECTION", "TASKS"]);
        for (name, count) in sections {
            table.add_row(row![name, count]);
        }
        table.printstd();
    }

    /// Applied schema migrations, oldest first.
    pub fn migrations(history: &[AppliedMigration]) {
        let mut table = Table::new();

        table.add_row(row!["VERSION", "NAME", "APPLIED AT (UTC)"]);
        for migration in history {
            table.add_row(row![migration.version, migration.name, migration.applied_at]);
        }
        table.printstd();
    }
}

/// Formats `date` with a `chrono` pattern, falling back to ISO when the pattern is invalid.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(format)) {
        Ok(()) => out,
        Err(_) => date.to_string(),
    }
}
