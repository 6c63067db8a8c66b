//! In-memory view of every section and task, kept in step with a store.
//!
//! Mutations are write-through: the [`TaskRepository`] is asked first and the
//! in-memory map is only touched once it reports success. Reads never reach the
//! store; they return owned snapshots of the map.
//!
//! ```rust,no_run
//! use taskbox::db::store::SqliteStore;
//! use taskbox::libs::registry::TaskRegistry;
//! use taskbox::libs::task::{Priority, Task};
//! use chrono::NaiveDate;
//!
//! let mut registry = TaskRegistry::new(SqliteStore::new("taskbox.db"));
//! registry.initialize();
//!
//! let due = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! registry.add_task("Work", Task::new("Report", Priority::High, due));
//! for task in registry.sorted_by_due_date_then_priority() {
//!     println!("{task}");
//! }
//! ```

use super::repository::TaskRepository;
use super::section::Section;
use super::task::Task;
use indexmap::IndexMap;
use std::cmp::Ordering;
use tracing::{debug, info, warn};

/// Sections in creation order, each holding its tasks in creation order.
///
/// Generic over the store so tests can swap in an in-memory repository.
pub struct TaskRegistry<R: TaskRepository> {
    repo: R,
    sections: IndexMap<String, Section>,
}

impl<R: TaskRepository> TaskRegistry<R> {
    /// An empty registry; call [`initialize`](Self::initialize) to load the store.
    pub fn new(repo: R) -> Self {
        TaskRegistry {
            repo,
            sections: IndexMap::new(),
        }
    }

    /// Shorthand for `new` followed by `initialize`.
    pub fn load(repo: R) -> Self {
        let mut registry = Self::new(repo);
        registry.initialize();
        registry
    }

    /// Replaces local state with a full load from the store.
    ///
    /// Never fails: if the sections cannot be read the registry stays empty, and
    /// a section whose tasks cannot be read is kept with no tasks.
    pub fn initialize(&mut self) {
        self.sections.clear();

        let Some(loaded) = self.repo.load_all_sections() else {
            warn!("could not load sections, starting empty");
            return;
        };

        for mut section in loaded {
            match self.repo.load_tasks_for_section(&section.name) {
                Some(tasks) => tasks.into_iter().for_each(|task| section.add_task(task)),
                None => warn!(section = %section.name, "could not load tasks, section left empty"),
            }
            self.sections.insert(section.name.clone(), section);
        }

        info!(sections = self.sections.len(), tasks = self.task_count(), "registry loaded");
    }

    /// Creates a section. Already present in memory counts as success and
    /// does not touch the store.
    pub fn add_section(&mut self, name: &str) -> bool {
        if self.sections.contains_key(name) {
            debug!(section = name, "section already exists");
            return true;
        }

        if self.repo.save_section(name).is_none() {
            warn!(section = name, "section was not persisted");
            return false;
        }

        self.sections.insert(name.to_string(), Section::new(name));
        true
    }

    /// Removes a section and all of its tasks.
    pub fn remove_section(&mut self, name: &str) -> bool {
        if !self.repo.delete_section(name) {
            warn!(section = name, "section was not deleted");
            return false;
        }

        // shift_remove keeps the remaining sections in insertion order
        self.sections.shift_remove(name);
        true
    }

    /// Appends `task` to a section, creating the section first if needed.
    pub fn add_task(&mut self, section_name: &str, task: Task) -> bool {
        if !self.sections.contains_key(section_name) && !self.add_section(section_name) {
            return false;
        }

        let Some(id) = self.repo.save_task(&task, section_name) else {
            warn!(task = %task.name, section = section_name, "task was not persisted");
            return false;
        };

        match self.sections.get_mut(section_name) {
            Some(section) => {
                section.add_task(task.with_id(id));
                true
            }
            None => false,
        }
    }

    /// Removes the first task named like `task` from a section.
    ///
    /// The store is asked first; the in-memory copy is only dropped once the
    /// store confirms a row was deleted.
    pub fn remove_task(&mut self, section_name: &str, task: &Task) -> bool {
        if !self.repo.delete_task(&task.name, section_name) {
            warn!(task = %task.name, section = section_name, "task was not deleted");
            return false;
        }

        let Some(section) = self.sections.get_mut(section_name) else {
            warn!(section = section_name, "section missing from memory after task deletion");
            return false;
        };

        if section.remove_task_named(&task.name).is_none() {
            warn!(task = %task.name, section = section_name, "task missing from memory after deletion");
            return false;
        }
        true
    }

    /// Whether a section called `name` is loaded. Never queries the store.
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Number of sections, empty ones included.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of tasks across all sections.
    pub fn task_count(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }

    /// Section names in insertion order.
    pub fn list_section_names(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }

    /// Tasks of one section, or nothing if the section does not exist.
    pub fn list_tasks(&self, section_name: &str) -> Vec<Task> {
        self.sections
            .get(section_name)
            .map(|section| section.tasks().to_vec())
            .unwrap_or_default()
    }

    /// Every task, grouped by section in section order.
    pub fn list_all_tasks(&self) -> Vec<Task> {
        self.sections.values().flat_map(|section| section.tasks().iter().cloned()).collect()
    }

    /// Every task paired with its section name, in [`list_all_tasks`](Self::list_all_tasks) order.
    pub fn list_all_entries(&self) -> Vec<(String, Task)> {
        self.sections
            .values()
            .flat_map(|section| section.tasks().iter().map(move |task| (section.name.clone(), task.clone())))
            .collect()
    }

    /// Tasks whose name contains `term`, ignoring case.
    ///
    /// A blank term matches nothing rather than everything.
    pub fn search_by_name(&self, term: &str) -> Vec<Task> {
        if term.trim().is_empty() {
            return Vec::new();
        }

        let needle = term.to_lowercase();
        self.sections
            .values()
            .flat_map(|section| section.tasks().iter())
            .filter(|task| task.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// All tasks by ascending due date, higher priority first on the same date.
    /// Remaining ties keep their [`list_all_tasks`](Self::list_all_tasks) order.
    pub fn sorted_by_due_date_then_priority(&self) -> Vec<Task> {
        let mut tasks = self.list_all_tasks();
        tasks.sort_by(by_due_date_then_priority);
        tasks
    }

    /// Like [`sorted_by_due_date_then_priority`](Self::sorted_by_due_date_then_priority),
    /// keeping each task's section name.
    pub fn sorted_entries(&self) -> Vec<(String, Task)> {
        let mut entries = self.list_all_entries();
        entries.sort_by(|(_, a), (_, b)| by_due_date_then_priority(a, b));
        entries
    }
}

/// Earlier due date first, then higher priority rank. `sort_by` is stable, so
/// equal keys keep their original order.
fn by_due_date_then_priority(a: &Task, b: &Task) -> Ordering {
    a.due_date.cmp(&b.due_date).then_with(|| b.priority.rank().cmp(&a.priority.rank()))
}
