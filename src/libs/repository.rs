//! Persistence boundary of the task registry.
//!
//! Implementations perform one store operation per call and never cache.
//! Failures do not cross this boundary as error values: they are logged by
//! the implementation and surface as `None` / `false`.

use super::section::Section;
use super::task::Task;

/// Store operations the registry relies on. All of them are keyed by name.
pub trait TaskRepository {
    /// Creates a section row. `Some(id)` only when a new row was inserted;
    /// an existing name is reported as `None`.
    fn save_section(&self, name: &str) -> Option<i64>;

    /// All sections, without tasks, in store insertion order.
    fn load_all_sections(&self) -> Option<Vec<Section>>;

    /// Deletes a section and, through the store's cascade, its tasks.
    fn delete_section(&self, name: &str) -> bool;

    /// Inserts `task` under the named section. `None` if the section is unknown.
    fn save_task(&self, task: &Task, section_name: &str) -> Option<i64>;

    /// Tasks of one section in insertion order. Malformed rows are skipped.
    fn load_tasks_for_section(&self, name: &str) -> Option<Vec<Task>>;

    /// Deletes one task called `task_name` in `section_name`.
    fn delete_task(&self, task_name: &str, section_name: &str) -> bool;
}

impl<R: TaskRepository + ?Sized> TaskRepository for &R {
    fn save_section(&self, name: &str) -> Option<i64> {
        (**self).save_section(name)
    }

    fn load_all_sections(&self) -> Option<Vec<Section>> {
        (**self).load_all_sections()
    }

    fn delete_section(&self, name: &str) -> bool {
        (**self).delete_section(name)
    }

    fn save_task(&self, task: &Task, section_name: &str) -> Option<i64> {
        (**self).save_task(task, section_name)
    }

    fn load_tasks_for_section(&self, name: &str) -> Option<Vec<Task>> {
        (**self).load_tasks_for_section(name)
    }

    fn delete_task(&self, task_name: &str, section_name: &str) -> bool {
        (**self).delete_task(task_name, section_name)
    }
}
