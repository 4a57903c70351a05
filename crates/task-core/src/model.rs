//! Task Entities
//!
//! Data structures matching the backend's task documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the backend and the date inputs
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Task priority, ranked low < medium < high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Fixed sort rank (low=1, medium=2, high=3)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

/// Backend-side task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Completed,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Pending, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Status::Pending),
            "completed" => Some(Status::Completed),
            _ => None,
        }
    }

    fn from_completed(completed: bool) -> Self {
        if completed {
            Status::Completed
        } else {
            Status::Pending
        }
    }
}

/// Checklist entry owned by a task
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subtask {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Subtask {
    /// Create an incomplete subtask; blank titles are rejected
    pub fn new(title: &str) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            completed: false,
        })
    }
}

/// A task as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Backend identifier (None until the backend has stored the task)
    #[serde(rename = "taskID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    /// `YYYY-MM-DD`, empty when unset
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Create a new pending task with no subtasks
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: String::new(),
            priority,
            due_date: String::new(),
            completed: false,
            status: Status::Pending,
            subtasks: Vec::new(),
        }
    }

    /// Derive completion from the subtasks.
    ///
    /// Complete exactly when no subtask is left open, so a task without
    /// subtasks counts as complete.
    pub fn recompute_completion(&mut self) {
        self.completed = self.subtasks.iter().all(|s| s.completed);
        self.status = Status::from_completed(self.completed);
    }

    /// Mark the task and every subtask as completed
    pub fn mark_completed(&mut self) {
        self.completed = true;
        self.status = Status::Completed;
        for subtask in &mut self.subtasks {
            subtask.completed = true;
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Rounded share of completed subtasks, 0 when there are none
    pub fn progress_percent(&self) -> u8 {
        let total = self.subtasks.len();
        if total == 0 {
            return 0;
        }
        let done = self.subtasks.iter().filter(|s| s.completed).count();
        ((done as f64 / total as f64) * 100.0).round() as u8
    }

    /// Due date as `dd/mm/yyyy`
    pub fn due_date_display(&self) -> String {
        if self.due_date.is_empty() {
            return "No due date".to_string();
        }
        match NaiveDate::parse_from_str(&self.due_date, DUE_DATE_FORMAT) {
            Ok(date) => date.format("%d/%m/%Y").to_string(),
            Err(_) => self.due_date.clone(),
        }
    }
}

/// One page of the task listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPage {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(subtasks: &[(&str, bool)]) -> Task {
        let mut task = Task::new("Write report", Priority::Medium);
        task.subtasks = subtasks
            .iter()
            .map(|(title, completed)| Subtask {
                title: title.to_string(),
                completed: *completed,
            })
            .collect();
        task
    }

    #[test]
    fn test_priority_rank() {
        assert!(Priority::Low.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::High.rank());
        assert_eq!(Priority::from_str("high"), Some(Priority::High));
        assert_eq!(Priority::from_str("urgent"), None);
    }

    #[test]
    fn test_recompute_completion() {
        let mut task = make_task(&[("draft", true), ("review", false)]);
        task.recompute_completion();
        assert!(!task.completed);
        assert_eq!(task.status, Status::Pending);

        task.subtasks[1].completed = true;
        task.recompute_completion();
        assert!(task.completed);
        assert_eq!(task.status, Status::Completed);
    }

    #[test]
    fn test_recompute_without_subtasks_completes() {
        let mut task = Task::new("No checklist", Priority::Low);
        task.recompute_completion();
        assert!(task.completed);
        assert_eq!(task.status, Status::Completed);
    }

    #[test]
    fn test_mark_completed() {
        let mut task = make_task(&[("a", false), ("b", true)]);
        task.mark_completed();
        assert!(task.is_completed());
        assert!(task.subtasks.iter().all(|s| s.completed));
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(make_task(&[]).progress_percent(), 0);
        assert_eq!(make_task(&[("a", true), ("b", false), ("c", false)]).progress_percent(), 33);
        assert_eq!(make_task(&[("a", true), ("b", true)]).progress_percent(), 100);
    }

    #[test]
    fn test_subtask_rejects_blank_title() {
        assert!(Subtask::new("   ").is_none());
        assert_eq!(Subtask::new("  buy milk ").unwrap().title, "buy milk");
    }

    #[test]
    fn test_due_date_display() {
        let mut task = make_task(&[]);
        assert_eq!(task.due_date_display(), "No due date");
        task.due_date = "2024-03-09".to_string();
        assert_eq!(task.due_date_display(), "09/03/2024");
    }

    #[test]
    fn test_task_json_field_names() {
        let json = r#"{
            "taskID": 7,
            "title": "Plan trip",
            "description": "Book flights",
            "priority": "high",
            "dueDate": "2024-05-01",
            "completed": false,
            "status": "pending",
            "subtasks": [{"title": "Pick dates", "completed": true}]
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, Some(7));
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, "2024-05-01");
        assert_eq!(task.subtasks.len(), 1);

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["taskID"], 7);
        assert_eq!(value["dueDate"], "2024-05-01");
    }

    #[test]
    fn test_draft_task_omits_id() {
        let value = serde_json::to_value(Task::new("New", Priority::Low)).unwrap();
        assert!(value.get("taskID").is_none());
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn test_page_defaults() {
        let page: TaskPage = serde_json::from_str(r#"{"tasks": []}"#).unwrap();
        assert_eq!(page.total_pages, 1);
    }
}
