use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How urgent a task is.
///
/// Ordering between priorities is given by [`Priority::rank`] only; the
/// declaration order of the variants carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Moderate,
    High,
}

impl Priority {
    /// Numeric rank used for tie-breaking: HIGH=3, MODERATE=2, LOW=1.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Moderate => 2,
            Priority::Low => 1,
        }
    }

    /// Textual form stored in the `tasks.priority` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Moderate => "MODERATE",
            Priority::High => "HIGH",
        }
    }

    /// Exact inverse of [`as_str`](Self::as_str). Stored text is never trimmed
    /// or case-folded; anything else is rejected.
    pub fn from_stored(s: &str) -> Result<Self, ParsePriorityError> {
        [Priority::Low, Priority::Moderate, Priority::High]
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| ParsePriorityError(s.to_string()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority '{0}'")]
pub struct ParsePriorityError(pub String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Priority::Low),
            "MODERATE" => Ok(Priority::Moderate),
            "HIGH" => Ok(Priority::High),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

/// A named unit of work owned by exactly one section.
///
/// Tasks are immutable once created. `id` is the store's row id, filled in
/// after a successful save or on load; it is not used to identify a task for
/// removal, which goes by name within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
}

impl Task {
    /// A task not yet saved; `id` stays `None` until the store assigns one.
    pub fn new(name: &str, priority: Priority, due_date: NaiveDate) -> Self {
        Task {
            id: None,
            name: name.to_string(),
            priority,
            due_date,
        }
    }

    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Priority: {} Due: {})", self.name, self.priority, self.due_date.format("%b %d"))
    }
}
