//! SQLite implementation of [`TaskRepository`].
//!
//! Each call opens its own connection through [`Db::open`], runs a single
//! statement (plus a section id lookup for task inserts) and drops the
//! connection on return, whether it succeeded or not. Errors are logged here
//! and reported to the caller as `None` / `false`.

use super::db::Db;
use super::error::{StoreError, StoreResult};
use super::sections::Sections;
use super::tasks::Tasks;
use crate::libs::repository::TaskRepository;
use crate::libs::section::Section;
use crate::libs::task::Task;
use std::path::PathBuf;
use tracing::{debug, error, warn};

/// [`TaskRepository`] backed by the SQLite file at `path`.
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Does not touch the file; the database is opened and migrated on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SqliteStore { path: path.into() }
    }

    fn connect(&self) -> StoreResult<Db> {
        Db::open(&self.path).map_err(|e| StoreError::Connection(format!("{}: {:#}", self.path.display(), e)))
    }

    fn try_save_section(&self, name: &str) -> StoreResult<i64> {
        let db = self.connect()?;
        Sections::new(&db.conn)
            .insert(name)?
            .ok_or_else(|| StoreError::Constraint(format!("section '{}' already exists", name)))
    }

    fn try_load_all_sections(&self) -> StoreResult<Vec<Section>> {
        let db = self.connect()?;
        let rows = Sections::new(&db.conn).fetch_all()?;
        Ok(rows.iter().map(|(_, name)| Section::new(name)).collect())
    }

    fn try_delete_section(&self, name: &str) -> StoreResult<()> {
        let db = self.connect()?;
        match Sections::new(&db.conn).delete(name)? {
            0 => Err(StoreError::NotFound(format!("section '{}'", name))),
            _ => Ok(()),
        }
    }

    fn try_save_task(&self, task: &Task, section_name: &str) -> StoreResult<i64> {
        let db = self.connect()?;
        let section_id = Sections::new(&db.conn)
            .id_by_name(section_name)?
            .ok_or_else(|| StoreError::NotFound(format!("section '{}'", section_name)))?;
        Tasks::new(&db.conn).insert(task, section_id)
    }

    fn try_load_tasks_for_section(&self, name: &str) -> StoreResult<Vec<Task>> {
        let db = self.connect()?;
        let rows = Tasks::new(&db.conn).fetch_by_section(name)?;

        let mut tasks = Vec::with_capacity(rows.len());
        for row in rows {
            match row.into_task() {
                Ok(task) => tasks.push(task),
                Err(e) => warn!(section = name, error = %e, "skipping task row"),
            }
        }
        Ok(tasks)
    }

    fn try_delete_task(&self, task_name: &str, section_name: &str) -> StoreResult<()> {
        let db = self.connect()?;
        match Tasks::new(&db.conn).delete_by_name(task_name, section_name)? {
            0 => Err(StoreError::NotFound(format!("task '{}' in section '{}'", task_name, section_name))),
            _ => Ok(()),
        }
    }
}

/// Logs a failed store call at a level matching its cause.
fn report(operation: &str, err: &StoreError) {
    match err {
        StoreError::NotFound(_) | StoreError::Constraint(_) => warn!(operation, error = %err, "store operation rejected"),
        _ => error!(operation, error = %err, "store operation failed"),
    }
}

impl TaskRepository for SqliteStore {
    fn save_section(&self, name: &str) -> Option<i64> {
        self.try_save_section(name)
            .inspect(|id| debug!(section = name, id, "section saved"))
            .inspect_err(|e| report("save_section", e))
            .ok()
    }

    fn load_all_sections(&self) -> Option<Vec<Section>> {
        self.try_load_all_sections()
            .inspect(|sections| debug!(count = sections.len(), "sections loaded"))
            .inspect_err(|e| report("load_all_sections", e))
            .ok()
    }

    fn delete_section(&self, name: &str) -> bool {
        self.try_delete_section(name).inspect_err(|e| report("delete_section", e)).is_ok()
    }

    fn save_task(&self, task: &Task, section_name: &str) -> Option<i64> {
        self.try_save_task(task, section_name)
            .inspect(|id| debug!(task = %task.name, section = section_name, id, "task saved"))
            .inspect_err(|e| report("save_task", e))
            .ok()
    }

    fn load_tasks_for_section(&self, name: &str) -> Option<Vec<Task>> {
        self.try_load_tasks_for_section(name)
            .inspect_err(|e| report("load_tasks_for_section", e))
            .ok()
    }

    fn delete_task(&self, task_name: &str, section_name: &str) -> bool {
        self.try_delete_task(task_name, section_name)
            .inspect_err(|e| report("delete_task", e))
            .is_ok()
    }
}
