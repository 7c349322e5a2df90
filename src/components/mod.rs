//! UI Components
//!
//! Leptos components for the task list.

mod new_task_form;
mod filter_bar;
mod search_box;
mod progress_bar;
mod task_row;
mod task_list;
mod due_today_banner;

pub use new_task_form::NewTaskForm;
pub use filter_bar::FilterBar;
pub use search_box::SearchBox;
pub use progress_bar::ProgressBar;
pub use task_row::TaskRow;
pub use task_list::TaskList;
pub use due_today_banner::DueTodayBanner;
