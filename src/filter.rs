// View filtering for the task list

use crate::models::Task;
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Selects a subset of the task list for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    /// Whether a task belongs to this filter's subset
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Order-preserving subset of `tasks`
    pub fn apply(self, tasks: &[Task]) -> Vec<&Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Pending => "pending",
            Filter::Completed => "completed",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Filter {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "pending" => Ok(Filter::Pending),
            "completed" => Ok(Filter::Completed),
            other => Err(eyre!("Unknown filter: {} (expected all, pending or completed)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> Vec<Task> {
        let mut tasks: Vec<Task> = (0..6).map(|i| Task::new(format!("task {}", i))).collect();
        tasks[1].completed = true;
        tasks[4].completed = true;
        tasks
    }

    #[test]
    fn test_filter_default_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn test_filter_apply_preserves_order() {
        let tasks = sample();
        let pending = Filter::Pending.apply(&tasks);
        let texts: Vec<&str> = pending.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["task 0", "task 2", "task 3", "task 5"]);

        let completed = Filter::Completed.apply(&tasks);
        let texts: Vec<&str> = completed.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["task 1", "task 4"]);
    }

    #[test]
    fn test_pending_and_completed_partition_all() {
        let tasks = sample();
        let pending: HashSet<&str> = Filter::Pending.apply(&tasks).into_iter().map(|t| t.id.as_str()).collect();
        let completed: HashSet<&str> = Filter::Completed.apply(&tasks).into_iter().map(|t| t.id.as_str()).collect();
        let all: HashSet<&str> = Filter::All.apply(&tasks).into_iter().map(|t| t.id.as_str()).collect();

        assert!(pending.is_disjoint(&completed));
        let union: HashSet<&str> = pending.union(&completed).copied().collect();
        assert_eq!(union, all);
        assert_eq!(all.len(), tasks.len());
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("Pending".parse::<Filter>().unwrap(), Filter::Pending);
        assert_eq!(" completed ".parse::<Filter>().unwrap(), Filter::Completed);
        assert!("done".parse::<Filter>().is_err());
    }

    #[test]
    fn test_filter_display() {
        for filter in Filter::ALL {
            assert_eq!(filter.to_string().parse::<Filter>().unwrap(), filter);
        }
        assert_eq!(Filter::Pending.to_string(), "pending");
    }

    #[test]
    fn test_filter_serialization() {
        assert_eq!(serde_json::to_string(&Filter::Completed).unwrap(), "\"completed\"");
    }
}
