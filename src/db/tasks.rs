use super::error::{StoreError, StoreResult};
use crate::libs::task::{Priority, Task};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, Connection};

const INSERT_TASK: &str = "INSERT INTO tasks (name, priority, due_date, section_id) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TASKS_BY_SECTION: &str = "
    SELECT t.id, t.name, t.priority, t.due_date FROM tasks t
    JOIN sections s ON t.section_id = s.id
    WHERE s.name = ?1
    ORDER BY t.id ASC
";
// Same-named tasks in a section are indistinguishable; the oldest one goes.
const DELETE_TASK_BY_NAME: &str = "
    DELETE FROM tasks WHERE id = (
        SELECT t.id FROM tasks t
        JOIN sections s ON t.section_id = s.id
        WHERE t.name = ?1 AND s.name = ?2
        ORDER BY t.id ASC
        LIMIT 1
    )
";

/// A task row as stored, before priority and date are validated.
///
/// `priority` and `due_date` are kept as raw SQLite values: the columns have
/// numeric affinity, so a bad value may come back as an integer or real and
/// must not fail the whole query.
#[derive(Debug, Clone)]
pub struct TaskRow {
    pub id: i64,
    pub name: String,
    pub priority: Value,
    pub due_date: Value,
}

impl TaskRow {
    /// Validates the raw columns.
    ///
    /// # Returns
    ///
    /// The task with its row id, or [`StoreError::Malformed`] when the priority
    /// is not exactly `LOW`/`MODERATE`/`HIGH` or the due date is not `YYYY-MM-DD` text.
    pub fn into_task(self) -> StoreResult<Task> {
        let id = self.id;
        let malformed = |reason: String| StoreError::Malformed { id, reason };

        let priority = match &self.priority {
            Value::Text(text) => Priority::from_stored(text).map_err(|e| malformed(e.to_string()))?,
            other => return Err(malformed(format!("priority stored as {:?}", other))),
        };
        let due_date = match &self.due_date {
            Value::Text(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|e| malformed(format!("due date '{}': {}", text, e)))?,
            other => return Err(malformed(format!("due date stored as {:?}", other))),
        };

        Ok(Task::new(&self.name, priority, due_date).with_id(id))
    }
}

/// Row-level access to the `tasks` table over a borrowed connection.
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Tasks { conn }
    }

    /// Always inserts a new row and returns its id.
    pub fn insert(&self, task: &Task, section_id: i64) -> StoreResult<i64> {
        self.conn.execute(INSERT_TASK, params![task.name, task.priority.as_str(), task.due_date, section_id])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch_by_section(&self, section_name: &str) -> StoreResult<Vec<TaskRow>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS_BY_SECTION)?;
        let rows = stmt
            .query_map(params![section_name], |row| {
                Ok(TaskRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    priority: row.get(2)?,
                    due_date: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Deletes at most one task with this name in this section.
    pub fn delete_by_name(&self, task_name: &str, section_name: &str) -> StoreResult<usize> {
        Ok(self.conn.execute(DELETE_TASK_BY_NAME, params![task_name, section_name])?)
    }
}
