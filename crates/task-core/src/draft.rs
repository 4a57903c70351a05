//! Task Draft
//!
//! Form state for creating a task before it is sent to the backend.

use chrono::NaiveDate;

use crate::model::{Priority, Subtask, Task, DUE_DATE_FORMAT};
use crate::validate::FormErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// Text typed into the "Subtask Title" input, not yet added
    pub subtask_title: String,
    pub subtasks: Vec<Subtask>,
    pub priority: Priority,
    pub due_date: String,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the subtask input into the list. Returns false for blank input.
    pub fn add_subtask(&mut self) -> bool {
        match Subtask::new(&self.subtask_title) {
            Some(subtask) => {
                self.subtasks.push(subtask);
                self.subtask_title.clear();
                true
            }
            None => false,
        }
    }

    pub fn remove_subtask(&mut self, index: usize) {
        if index < self.subtasks.len() {
            self.subtasks.remove(index);
        }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        if self.title.trim().is_empty() {
            errors.set("title", "Task name is required");
        }
        errors.set("dueDate", validate_due_date(&self.due_date));
        errors
    }

    /// Build the task to send to the backend
    pub fn into_task(self) -> Task {
        let mut task = Task::new(self.title.trim(), self.priority);
        task.description = self.description;
        task.due_date = self.due_date;
        task.subtasks = self.subtasks;
        task
    }
}

/// Empty is allowed; anything else must be a `YYYY-MM-DD` calendar date
pub fn validate_due_date(due_date: &str) -> String {
    if due_date.is_empty() || NaiveDate::parse_from_str(due_date, DUE_DATE_FORMAT).is_ok() {
        return String::new();
    }
    "Due date must be a valid date".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    #[test]
    fn test_add_and_remove_subtasks() {
        let mut draft = TaskDraft::new();
        draft.subtask_title = "  ".to_string();
        assert!(!draft.add_subtask());
        assert!(draft.subtasks.is_empty());

        draft.subtask_title = "Buy paint".to_string();
        assert!(draft.add_subtask());
        draft.subtask_title = "Paint fence".to_string();
        assert!(draft.add_subtask());
        assert!(draft.subtask_title.is_empty());

        draft.remove_subtask(5);
        assert_eq!(draft.subtasks.len(), 2);
        draft.remove_subtask(0);
        assert_eq!(draft.subtasks[0].title, "Paint fence");
    }

    #[test]
    fn test_title_required() {
        let draft = TaskDraft::new();
        assert_eq!(draft.validate().get("title"), "Task name is required");

        let draft = TaskDraft {
            title: "Fence".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_due_date_format() {
        assert_eq!(validate_due_date(""), "");
        assert_eq!(validate_due_date("2024-02-29"), "");
        assert_ne!(validate_due_date("2023-02-29"), "");
        assert_ne!(validate_due_date("01/02/2024"), "");
    }

    #[test]
    fn test_into_task() {
        let draft = TaskDraft {
            title: " Fence ".to_string(),
            description: "Back yard".to_string(),
            subtasks: vec![Subtask::new("Buy paint").unwrap()],
            priority: Priority::High,
            due_date: "2024-06-01".to_string(),
            ..Default::default()
        };
        let task = draft.into_task();
        assert_eq!(task.id, None);
        assert_eq!(task.title, "Fence");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, Status::Pending);
        assert!(!task.completed);
        assert_eq!(task.subtasks.len(), 1);
    }
}
