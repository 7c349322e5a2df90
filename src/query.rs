//! Filter, Search and Sort
//!
//! Pure functions over the task collection. Filtering and search are
//! view-only; `sort_by_deadline` returns a new order the caller may persist.

use std::cmp::Ordering;

use crate::models::{FilterMode, Task};

/// A task selected for display, with its position in the full collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleTask {
    pub index: usize,
    pub task: Task,
}

/// Case-insensitive substring match; an empty keyword matches everything
pub fn matches_keyword(task: &Task, keyword: &str) -> bool {
    if keyword.is_empty() {
        return true;
    }
    task.text.to_lowercase().contains(&keyword.to_lowercase())
}

/// Tasks admitted by both the filter mode and the keyword, in collection order
pub fn compute_visible(tasks: &[Task], filter: FilterMode, keyword: &str) -> Vec<VisibleTask> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| filter.admits(task) && matches_keyword(task, keyword))
        .map(|(index, task)| VisibleTask {
            index,
            task: task.clone(),
        })
        .collect()
}

/// Tasks with a deadline first, earliest deadline first; stable otherwise
pub fn sort_by_deadline(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| match (a.deadline, b.deadline) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}
