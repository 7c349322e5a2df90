//! Edit Prompts
//!
//! Editing asks the user for a new text and a new deadline through two
//! sequential prompts. A cancelled prompt comes back as `None` and
//! abandons the edit.

use crate::deadline::format_date;
use crate::models::Task;

pub trait Prompt {
    fn ask(&self, message: &str, default: &str) -> Option<String>;
}

/// `window.prompt`
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn ask(&self, message: &str, default: &str) -> Option<String> {
        let window = web_sys::window()?;
        window
            .prompt_with_message_and_default(message, default)
            .ok()
            .flatten()
    }
}

/// Answers collected for one edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditAnswers {
    pub text: String,
    pub deadline: String,
}

/// Ask for the new text, then the new deadline, pre-filled from `task`.
/// A cancelled or blank text skips the deadline prompt; cancelling either
/// prompt yields `None`.
pub fn ask_edit(prompt: &impl Prompt, task: &Task) -> Option<EditAnswers> {
    let text = prompt
        .ask("Edit task", &task.text)
        .filter(|t| !t.trim().is_empty())?;
    let current_deadline = task.deadline.map(format_date).unwrap_or_default();
    let deadline = prompt.ask("Edit deadline (YYYY-MM-DD)", &current_deadline)?;
    Some(EditAnswers { text, deadline })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deadline::parse_date;
    use crate::models::TaskId;
    use std::cell::RefCell;

    /// Replays canned answers and records what was asked
    struct Scripted {
        answers: RefCell<Vec<Option<String>>>,
        asked: RefCell<Vec<(String, String)>>,
    }

    impl Scripted {
        fn new(answers: Vec<Option<&str>>) -> Self {
            let mut answers: Vec<_> = answers.into_iter().map(|a| a.map(String::from)).collect();
            answers.reverse();
            Self {
                answers: RefCell::new(answers),
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompt for Scripted {
        fn ask(&self, message: &str, default: &str) -> Option<String> {
            self.asked.borrow_mut().push((message.to_string(), default.to_string()));
            self.answers.borrow_mut().pop().flatten()
        }
    }

    #[test]
    fn test_ask_edit_prefills_current_values() {
        let task = Task::new(TaskId(1), "Buy milk", parse_date("2024-06-10"));
        let prompt = Scripted::new(vec![Some("Buy oat milk"), Some("2024-06-12")]);

        let answers = ask_edit(&prompt, &task).unwrap();
        assert_eq!(answers.text, "Buy oat milk");
        assert_eq!(answers.deadline, "2024-06-12");

        let asked = prompt.asked.borrow();
        assert_eq!(asked[0].1, "Buy milk");
        assert_eq!(asked[1].1, "2024-06-10");
    }

    #[test]
    fn test_ask_edit_cancelled_text_skips_deadline_prompt() {
        let task = Task::new(TaskId(1), "A", parse_date("2024-06-10"));
        for first in [None, Some("   ")] {
            let prompt = Scripted::new(vec![first, Some("2024-07-01")]);
            assert_eq!(ask_edit(&prompt, &task), None);
            assert_eq!(prompt.asked.borrow().len(), 1);
        }
    }

    #[test]
    fn test_ask_edit_cancelled_deadline() {
        let task = Task::new(TaskId(1), "A", None);
        let prompt = Scripted::new(vec![Some("A edited"), None]);

        assert_eq!(ask_edit(&prompt, &task), None);
        assert_eq!(prompt.asked.borrow()[1].1, "");
    }

    #[test]
    fn test_ask_edit_empty_deadline_is_an_answer() {
        let task = Task::new(TaskId(1), "A", parse_date("2024-06-10"));
        let prompt = Scripted::new(vec![Some("A"), Some("")]);

        let answers = ask_edit(&prompt, &task).unwrap();
        assert_eq!(answers.deadline, "");
    }
}
