// User-facing notifications produced from store outcomes

use crate::error::ValidationError;
use crate::store::{ClearOutcome, DeleteOutcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A transient message for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn added() -> Self {
        Self::new("Task added successfully!", Severity::Success)
    }

    pub fn invalid(error: &ValidationError) -> Self {
        match error {
            ValidationError::Empty => Self::new("Please enter a task!", Severity::Error),
            ValidationError::TooLong { .. } => Self::new("Task is too long! Max 100 characters.", Severity::Error),
        }
    }

    pub fn toggled(completed: bool) -> Self {
        let status = if completed { "completed" } else { "marked as pending" };
        Self::new(format!("Task {}!", status), Severity::Info)
    }

    /// `None` for outcomes that stay silent
    pub fn deleted(outcome: &DeleteOutcome) -> Option<Self> {
        match outcome {
            DeleteOutcome::Deleted(_) => Some(Self::new("Task deleted!", Severity::Info)),
            DeleteOutcome::NotFound | DeleteOutcome::Declined => None,
        }
    }

    /// `None` for outcomes that stay silent
    pub fn cleared(outcome: &ClearOutcome) -> Option<Self> {
        match outcome {
            ClearOutcome::Cleared(_) => Some(Self::new("All tasks cleared!", Severity::Info)),
            ClearOutcome::NothingToClear => Some(Self::new("No tasks to clear!", Severity::Info)),
            ClearOutcome::Declined => None,
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    #[test]
    fn test_validation_notifications_are_errors() {
        let empty = Notification::invalid(&ValidationError::Empty);
        assert_eq!(empty.severity, Severity::Error);
        assert_eq!(empty.message, "Please enter a task!");

        let long = Notification::invalid(&ValidationError::TooLong { len: 101 });
        assert_eq!(long.severity, Severity::Error);
        assert_eq!(long.message, "Task is too long! Max 100 characters.");
    }

    #[test]
    fn test_toggle_messages() {
        assert_eq!(Notification::toggled(true).message, "Task completed!");
        assert_eq!(Notification::toggled(false).message, "Task marked as pending!");
        assert_eq!(Notification::toggled(true).severity, Severity::Info);
    }

    #[test]
    fn test_delete_outcomes() {
        let deleted = Notification::deleted(&DeleteOutcome::Deleted(Task::new("x"))).unwrap();
        assert_eq!(deleted.message, "Task deleted!");
        assert!(Notification::deleted(&DeleteOutcome::NotFound).is_none());
        assert!(Notification::deleted(&DeleteOutcome::Declined).is_none());
    }

    #[test]
    fn test_clear_outcomes() {
        assert_eq!(
            Notification::cleared(&ClearOutcome::Cleared(3)).unwrap().message,
            "All tasks cleared!"
        );
        let nothing = Notification::cleared(&ClearOutcome::NothingToClear).unwrap();
        assert_eq!(nothing.message, "No tasks to clear!");
        assert_eq!(nothing.severity, Severity::Info);
        assert!(Notification::cleared(&ClearOutcome::Declined).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Notification::added().to_string(), "[success] Task added successfully!");
    }
}
