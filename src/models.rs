//! Task Models
//!
//! The persisted task entity and the small enums the view layer works with.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable task identifier, assigned once at creation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl TaskId {
    /// Records written before ids existed deserialize to this
    pub const UNASSIGNED: TaskId = TaskId(0);

    pub fn is_assigned(self) -> bool {
        self != Self::UNASSIGNED
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One to-do item (matches the stored interchange object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub done: bool,
    #[serde(
        default,
        serialize_with = "crate::deadline::serialize_opt",
        deserialize_with = "crate::deadline::deserialize_opt"
    )]
    pub deadline: Option<NaiveDate>,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>, deadline: Option<NaiveDate>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
            deadline,
        }
    }
}

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Done,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Done];

    pub fn admits(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.done,
            FilterMode::Done => task.done,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Done => "Done",
        }
    }
}

/// Deadline relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeadlineStatus {
    None,
    Overdue,
    DueToday,
    Upcoming,
}

impl DeadlineStatus {
    /// CSS class for a task row; upcoming deadlines get no decoration
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            DeadlineStatus::Overdue => Some("overdue"),
            DeadlineStatus::DueToday => Some("due-today"),
            DeadlineStatus::None | DeadlineStatus::Upcoming => None,
        }
    }
}

/// The control currently highlighted in the toolbar (decoration only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveControl {
    Filter(FilterMode),
    SortByDeadline,
}

impl Default for ActiveControl {
    fn default() -> Self {
        ActiveControl::Filter(FilterMode::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_admits() {
        let mut task = Task::new(TaskId(1), "A", None);
        assert!(FilterMode::All.admits(&task));
        assert!(FilterMode::Active.admits(&task));
        assert!(!FilterMode::Done.admits(&task));

        task.done = true;
        assert!(FilterMode::All.admits(&task));
        assert!(!FilterMode::Active.admits(&task));
        assert!(FilterMode::Done.admits(&task));
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task::new(TaskId(3), "Buy milk", NaiveDate::from_ymd_opt(2024, 6, 10));
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "text": "Buy milk", "done": false, "deadline": "2024-06-10"})
        );

        let no_deadline = Task::new(TaskId(4), "A", None);
        let json = serde_json::to_value(&no_deadline).unwrap();
        assert_eq!(json["deadline"], serde_json::Value::Null);
    }

    #[test]
    fn test_task_legacy_record() {
        let task: Task = serde_json::from_str(r#"{"text":"A","done":true,"deadline":null}"#).unwrap();
        assert_eq!(task.id, TaskId::UNASSIGNED);
        assert!(task.done);
        assert_eq!(task.deadline, None);

        let task: Task = serde_json::from_str(r#"{"text":"B","done":false}"#).unwrap();
        assert_eq!(task.deadline, None);
    }

    #[test]
    fn test_task_unparseable_deadline_is_absent() {
        let task: Task =
            serde_json::from_str(r#"{"text":"A","done":false,"deadline":"someday"}"#).unwrap();
        assert_eq!(task.deadline, None);
    }
}
