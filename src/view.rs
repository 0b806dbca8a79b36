// Renderable projection of the task list

use crate::filter::Filter;
use crate::models::{Task, TaskStats};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;

const DATE_FORMAT: &str = "%b %-d, %I:%M %p";

/// One displayed task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created: String,
}

impl TaskRow {
    pub fn from_task(task: &Task) -> Self {
        Self::from_task_in(task, &Local)
    }

    /// Like [`TaskRow::from_task`] with the creation date shown in `tz`
    pub fn from_task_in<Tz>(task: &Task, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id: task.id.clone(),
            text: task.text.clone(),
            completed: task.completed,
            created: format_date(&task.created_at, tz),
        }
    }
}

/// Filtered rows plus summary counters over the whole list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    pub filter: Filter,
    pub rows: Vec<TaskRow>,
    pub stats: TaskStats,
}

impl TaskView {
    pub fn project(tasks: &[Task], filter: Filter) -> Self {
        Self::project_in(tasks, filter, &Local)
    }

    pub fn project_in<Tz>(tasks: &[Task], filter: Filter, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            filter,
            rows: filter.apply(tasks).into_iter().map(|t| TaskRow::from_task_in(t, tz)).collect(),
            stats: TaskStats::from_tasks(tasks),
        }
    }

    /// Message shown in place of rows when the filtered view is empty
    pub fn empty_message(&self) -> Option<String> {
        if !self.rows.is_empty() {
            return None;
        }
        Some(match self.filter {
            Filter::All => "No tasks found".to_string(),
            other => format!("No {} tasks found", other),
        })
    }

    /// The three counters as display labels
    pub fn stat_labels(&self) -> [String; 3] {
        [
            format!("Total: {}", self.stats.total),
            format!("Pending: {}", self.stats.pending),
            format!("Completed: {}", self.stats.completed),
        ]
    }
}

impl std::fmt::Display for TaskView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.empty_message() {
            Some(message) => writeln!(f, "  {}", message)?,
            None => {
                for row in &self.rows {
                    let mark = if row.completed { "x" } else { " " };
                    writeln!(f, "  [{}] {}  ({})  {}", mark, row.text, row.created, row.id)?;
                }
            }
        }
        write!(f, "  {}", self.stat_labels().join("  "))
    }
}

fn format_date<Tz>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, text: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            text: text.to_string(),
            completed,
            created_at: "2024-10-18T21:30:00.000Z".parse().unwrap(),
        }
    }

    fn sample() -> Vec<Task> {
        vec![task("3", "Call mom", false), task("2", "Pay rent", true), task("1", "Buy milk", false)]
    }

    #[test]
    fn test_project_filters_rows_but_not_stats() {
        let view = TaskView::project_in(&sample(), Filter::Completed, &Utc);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].text, "Pay rent");
        assert_eq!(
            view.stats,
            TaskStats {
                total: 3,
                pending: 2,
                completed: 1
            }
        );
    }

    #[test]
    fn test_rows_keep_order() {
        let view = TaskView::project_in(&sample(), Filter::Pending, &Utc);
        let ids: Vec<&str> = view.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_date_format() {
        let row = TaskRow::from_task_in(&task("1", "Buy milk", false), &Utc);
        assert_eq!(row.created, "Oct 18, 09:30 PM");
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(
            TaskView::project_in(&[], Filter::All, &Utc).empty_message().as_deref(),
            Some("No tasks found")
        );
        assert_eq!(
            TaskView::project_in(&[], Filter::Pending, &Utc).empty_message().as_deref(),
            Some("No pending tasks found")
        );

        let all_pending = vec![task("1", "Buy milk", false)];
        assert_eq!(
            TaskView::project_in(&all_pending, Filter::Completed, &Utc)
                .empty_message()
                .as_deref(),
            Some("No completed tasks found")
        );
        assert!(
            TaskView::project_in(&all_pending, Filter::All, &Utc)
                .empty_message()
                .is_none()
        );
    }

    #[test]
    fn test_stat_labels() {
        let view = TaskView::project_in(&sample(), Filter::All, &Utc);
        assert_eq!(view.stat_labels(), ["Total: 3", "Pending: 2", "Completed: 1"]);
    }

    #[test]
    fn test_display() {
        let view = TaskView::project_in(&sample()[1..2], Filter::All, &Utc);
        assert_eq!(
            view.to_string(),
            "  [x] Pay rent  (Oct 18, 09:30 PM)  2\n  Total: 1  Pending: 0  Completed: 1"
        );

        let empty = TaskView::project_in(&[], Filter::Pending, &Utc);
        assert_eq!(empty.to_string(), "  No pending tasks found\n  Total: 0  Pending: 0  Completed: 0");
    }
}
