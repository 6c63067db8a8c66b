//! # Taskbox
//!
//! A small personal task organizer. Tasks carry a name, a priority and a due
//! date, and live inside named sections. Everything is kept in a SQLite file
//! and mirrored in memory by [`TaskRegistry`](libs::registry::TaskRegistry),
//! which writes through to the store before it touches its own state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use taskbox::db::store::SqliteStore;
//! use taskbox::libs::registry::TaskRegistry;
//! use taskbox::libs::task::{Priority, Task};
//!
//! let mut registry = TaskRegistry::load(SqliteStore::new("taskbox.db"));
//! let due = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! registry.add_task("Work", Task::new("Report", Priority::High, due));
//!
//! for task in registry.sorted_by_due_date_then_priority() {
//!     println!("{task}");
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
