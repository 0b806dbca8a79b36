// Task store: in-memory task list mirrored into a key-value backend

use crate::confirm::{CLEAR_PROMPT, Confirm, DELETE_PROMPT};
use crate::error::ValidationError;
use crate::filter::Filter;
use crate::kv::{self, KeyValueStore};
use crate::models::{MAX_TEXT_LEN, Task, TaskStats};
use eyre::Result;
use tracing::{debug, info};

/// Result of [`TaskStore::delete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The task was removed and the list persisted
    Deleted(Task),
    /// No task with that id; nothing was asked or written
    NotFound,
    /// The user declined; nothing changed
    Declined,
}

/// Result of [`TaskStore::clear_all`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    /// This many tasks were removed and the empty list persisted
    Cleared(usize),
    /// The list was already empty; nothing was asked or written
    NothingToClear,
    /// The user declined; nothing changed
    Declined,
}

/// Ordered task list (newest first) persisted after every mutation
///
/// Mutations are applied to a copy, written to the backend, and only then
/// committed to memory. A failed write leaves the in-memory list untouched.
pub struct TaskStore<K: KeyValueStore> {
    kv: K,
    tasks: Vec<Task>,
}

impl<K: KeyValueStore> TaskStore<K> {
    /// Open a store over `kv`, loading whatever task list it holds
    ///
    /// A missing or corrupt entry yields an empty list.
    pub fn open(kv: K) -> Self {
        let tasks = kv::load_collection::<Task, _>(&kv);
        info!(count = tasks.len(), "Opened task store");
        Self { kv, tasks }
    }

    /// Re-read the persisted entry, replacing the in-memory list
    pub fn load(&mut self) {
        self.tasks = kv::load_collection::<Task, _>(&self.kv);
    }

    /// All tasks, newest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Get a reference to the backend
    pub fn backend(&self) -> &K {
        &self.kv
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Validate, create and prepend a task
    ///
    /// Fails with [`ValidationError`] (inside the report) when the trimmed
    /// text is empty or longer than 100 characters.
    pub fn add(&mut self, raw_text: &str) -> Result<Task> {
        let text = Self::validate_text(raw_text)?;

        let task = Task::new(text);
        let mut next = Vec::with_capacity(self.tasks.len() + 1);
        next.push(task.clone());
        next.extend(self.tasks.iter().cloned());

        self.commit(next)?;
        debug!(id = %task.id, "Added task");
        Ok(task)
    }

    /// Flip a task's completion flag
    ///
    /// Returns the new state, or `None` without writing if the id is unknown.
    pub fn toggle(&mut self, id: &str) -> Result<Option<bool>> {
        let Some(index) = self.position(id) else {
            debug!(id, "Toggle of unknown task ignored");
            return Ok(None);
        };

        let mut next = self.tasks.clone();
        next[index].completed = !next[index].completed;
        let completed = next[index].completed;

        self.commit(next)?;
        debug!(id, completed, "Toggled task");
        Ok(Some(completed))
    }

    /// Remove a task after the user confirms
    pub fn delete(&mut self, id: &str, confirm: &mut dyn Confirm) -> Result<DeleteOutcome> {
        let Some(index) = self.position(id) else {
            debug!(id, "Delete of unknown task ignored");
            return Ok(DeleteOutcome::NotFound);
        };

        if !confirm.confirm(DELETE_PROMPT) {
            debug!(id, "Delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let mut next = self.tasks.clone();
        let removed = next.remove(index);

        self.commit(next)?;
        debug!(id, "Deleted task");
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Remove every task after the user confirms
    pub fn clear_all(&mut self, confirm: &mut dyn Confirm) -> Result<ClearOutcome> {
        if !self.would_clear() {
            return Ok(ClearOutcome::NothingToClear);
        }

        if !confirm.confirm(CLEAR_PROMPT) {
            debug!("Clear declined");
            return Ok(ClearOutcome::Declined);
        }

        let count = self.tasks.len();
        self.commit(Vec::new())?;
        debug!(count, "Cleared all tasks");
        Ok(ClearOutcome::Cleared(count))
    }

    // ========================================================================
    // Projections
    // ========================================================================

    /// Tasks selected by `filter`, newest first
    pub fn filtered_view(&self, filter: Filter) -> Vec<&Task> {
        filter.apply(&self.tasks)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Whether `delete(id, ..)` would remove anything
    pub fn would_delete(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Whether `clear_all(..)` would remove anything
    pub fn would_clear(&self) -> bool {
        !self.tasks.is_empty()
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn commit(&mut self, next: Vec<Task>) -> Result<()> {
        kv::save_collection(&mut self.kv, &next)?;
        self.tasks = next;
        Ok(())
    }

    fn validate_text(raw_text: &str) -> Result<&str, ValidationError> {
        // Byte order marks count as whitespace, as in browser input fields
        let text = raw_text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if text.is_empty() {
            return Err(ValidationError::Empty);
        }

        let len = text.chars().count();
        if len > MAX_TEXT_LEN {
            return Err(ValidationError::TooLong { len });
        }

        Ok(text)
    }
}
