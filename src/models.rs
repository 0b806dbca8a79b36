// Data models for the to-do list

use crate::record::Record;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum task text length, in characters, after trimming
pub const MAX_TEXT_LEN: usize = 100;

/// A single to-do item
///
/// Serialized with the field names `id`, `text`, `completed` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a pending task with a fresh id, stamped with the current time
    ///
    /// The text is stored as given; validation happens in the store.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            text: text.into(),
            completed: false,
            created_at: now(),
        }
    }
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.id
    }

    fn collection_name() -> &'static str {
        "tasks"
    }
}

/// Summary counters over a task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total,
            pending: total - completed,
            completed,
        }
    }
}

/// Current time truncated to milliseconds, matching ISO 8601 timestamps
/// written by other clients of the same data
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Helper function to get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
