//! Progress and Due-Today Summary
//!
//! Numbers the render layer shows next to the list.

use chrono::NaiveDate;

use crate::deadline::classify;
use crate::models::{DeadlineStatus, Task};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            done: tasks.iter().filter(|t| t.done).count(),
            total: tasks.len(),
        }
    }

    /// Percentage of tasks done; 0 for an empty list
    pub fn percent_done(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f64 / self.total as f64 * 100.0
        }
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.done, self.total)
    }
}

/// Unfinished tasks whose deadline is `today`
pub fn due_today_pending(tasks: &[Task], today: NaiveDate) -> usize {
    tasks
        .iter()
        .filter(|t| !t.done && classify(t.deadline, today) == DeadlineStatus::DueToday)
        .count()
}

/// Banner text for `count` tasks due today
pub fn due_today_message(count: usize) -> String {
    if count == 1 {
        "You have 1 task due today".to_string()
    } else {
        format!("You have {} tasks due today", count)
    }
}
