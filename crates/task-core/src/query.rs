//! Task Query
//!
//! Listing parameters forwarded to the backend, and the local
//! sort/filter pass applied to the page it returns.

use std::cmp::Ordering;

use crate::model::{Priority, Status, Task};

/// Default number of tasks per page
pub const DEFAULT_PAGE_SIZE: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    DueDate,
    Priority,
}

impl SortKey {
    /// Value of the `sortBy` parameter (None is not sent)
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            SortKey::None => None,
            SortKey::DueDate => Some("dueDate"),
            SortKey::Priority => Some("priority"),
        }
    }

    pub fn from_param(s: &str) -> Self {
        match s {
            "dueDate" => SortKey::DueDate,
            "priority" => SortKey::Priority,
            _ => SortKey::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_param(s: &str) -> Self {
        match s {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Parameters of one task listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub keyword: String,
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TaskQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            sort_by: SortKey::None,
            sort_order: SortOrder::Asc,
            priority: None,
            status: None,
            keyword: String::new(),
        }
    }

    /// Trimmed keyword, None when blank
    pub fn keyword(&self) -> Option<&str> {
        let keyword = self.keyword.trim();
        (!keyword.is_empty()).then_some(keyword)
    }

    /// Query-string pairs in the backend's naming. Unset values are left out.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(sort_by) = self.sort_by.as_param() {
            params.push(("sortBy", sort_by.to_string()));
        }
        params.push(("sortOrder", self.sort_order.as_param().to_string()));
        if let Some(priority) = self.priority {
            params.push(("priority", priority.as_str().to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(keyword) = self.keyword() {
            params.push(("keyword", keyword.to_string()));
        }
        params
    }
}

/// Stable sort by the given key. Equal elements keep their relative order
/// in both directions.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey, order: SortOrder) {
    let compare = |a: &Task, b: &Task| -> Ordering {
        match key {
            SortKey::None => Ordering::Equal,
            SortKey::DueDate => a.due_date.cmp(&b.due_date),
            SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
        }
    };
    match order {
        SortOrder::Asc => tasks.sort_by(compare),
        SortOrder::Desc => tasks.sort_by(|a, b| compare(b, a)),
    }
}

/// Case-insensitive keyword match against title or description
pub fn matches_keyword(task: &Task, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    task.title.to_lowercase().contains(&keyword)
        || task.description.to_lowercase().contains(&keyword)
}

pub fn filter_tasks(tasks: Vec<Task>, query: &TaskQuery) -> Vec<Task> {
    let keyword = query.keyword();
    tasks
        .into_iter()
        .filter(|task| query.priority.map_or(true, |p| task.priority == p))
        .filter(|task| query.status.map_or(true, |s| task.status == s))
        .filter(|task| keyword.map_or(true, |k| matches_keyword(task, k)))
        .collect()
}

/// Re-apply filters and ordering to a page the backend returned
pub fn apply_locally(tasks: Vec<Task>, query: &TaskQuery) -> Vec<Task> {
    let mut tasks = filter_tasks(tasks, query);
    sort_tasks(&mut tasks, query.sort_by, query.sort_order);
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(title: &str, priority: Priority, due_date: &str) -> Task {
        let mut task = Task::new(title, priority);
        task.due_date = due_date.to_string();
        task
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_sort_by_priority_ascending() {
        let mut tasks = vec![
            make_task("h", Priority::High, ""),
            make_task("l", Priority::Low, ""),
            make_task("m", Priority::Medium, ""),
        ];
        sort_tasks(&mut tasks, SortKey::Priority, SortOrder::Asc);
        let priorities: Vec<_> = tasks.iter().map(|t| t.priority).collect();
        assert_eq!(priorities, vec![Priority::Low, Priority::Medium, Priority::High]);
    }

    #[test]
    fn test_sort_by_due_date_descending_reverses_ascending() {
        let original = vec![
            make_task("b", Priority::Low, "2024-02-01"),
            make_task("c", Priority::Low, "2024-03-01"),
            make_task("a", Priority::Low, "2024-01-01"),
        ];
        let mut asc = original.clone();
        sort_tasks(&mut asc, SortKey::DueDate, SortOrder::Asc);
        let mut desc = original;
        sort_tasks(&mut desc, SortKey::DueDate, SortOrder::Desc);

        assert_eq!(titles(&asc), vec!["a", "b", "c"]);
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut tasks = vec![
            make_task("first", Priority::Low, "2024-01-01"),
            make_task("other", Priority::Low, "2024-05-01"),
            make_task("second", Priority::Low, "2024-01-01"),
        ];
        sort_tasks(&mut tasks, SortKey::DueDate, SortOrder::Desc);
        assert_eq!(titles(&tasks), vec!["other", "first", "second"]);

        sort_tasks(&mut tasks, SortKey::DueDate, SortOrder::Asc);
        assert_eq!(titles(&tasks), vec!["first", "second", "other"]);
    }

    #[test]
    fn test_sort_none_keeps_order() {
        let mut tasks = vec![
            make_task("z", Priority::High, "2024-09-01"),
            make_task("a", Priority::Low, "2024-01-01"),
        ];
        sort_tasks(&mut tasks, SortKey::None, SortOrder::Desc);
        assert_eq!(titles(&tasks), vec!["z", "a"]);
    }

    #[test]
    fn test_filter_missing_keyword_yields_empty() {
        let tasks = vec![
            make_task("Groceries", Priority::Low, ""),
            make_task("Laundry", Priority::High, ""),
        ];
        let query = TaskQuery {
            keyword: "dentist".to_string(),
            ..Default::default()
        };
        assert!(filter_tasks(tasks, &query).is_empty());
    }

    #[test]
    fn test_filter_keyword_matches_description_case_insensitive() {
        let mut with_desc = make_task("Errands", Priority::Low, "");
        with_desc.description = "Pick up the DRY cleaning".to_string();
        let tasks = vec![with_desc, make_task("Groceries", Priority::High, "")];
        let query = TaskQuery {
            keyword: "dry".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&filter_tasks(tasks, &query)), vec!["Errands"]);
    }

    #[test]
    fn test_filter_by_priority_and_status() {
        let mut done = make_task("done", Priority::High, "");
        done.mark_completed();
        let tasks = vec![
            done,
            make_task("open-high", Priority::High, ""),
            make_task("open-low", Priority::Low, ""),
        ];
        let query = TaskQuery {
            priority: Some(Priority::High),
            status: Some(Status::Pending),
            ..Default::default()
        };
        assert_eq!(titles(&filter_tasks(tasks, &query)), vec!["open-high"]);
    }

    #[test]
    fn test_apply_locally_filters_then_sorts() {
        let tasks = vec![
            make_task("report high", Priority::High, ""),
            make_task("misc", Priority::Low, ""),
            make_task("report low", Priority::Low, ""),
        ];
        let query = TaskQuery {
            sort_by: SortKey::Priority,
            keyword: "report".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&apply_locally(tasks, &query)), vec!["report low", "report high"]);
    }

    #[test]
    fn test_to_params_omits_unset_values() {
        let query = TaskQuery {
            keyword: "   ".to_string(),
            ..Default::default()
        };
        let params = query.to_params();
        assert_eq!(
            params,
            vec![
                ("page", "1".to_string()),
                ("pageSize", "4".to_string()),
                ("sortOrder", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_to_params_full() {
        let query = TaskQuery {
            page: 3,
            page_size: 10,
            sort_by: SortKey::DueDate,
            sort_order: SortOrder::Desc,
            priority: Some(Priority::Medium),
            status: Some(Status::Completed),
            keyword: " gym ".to_string(),
        };
        let params = query.to_params();
        assert!(params.contains(&("sortBy", "dueDate".to_string())));
        assert!(params.contains(&("sortOrder", "desc".to_string())));
        assert!(params.contains(&("priority", "medium".to_string())));
        assert!(params.contains(&("status", "completed".to_string())));
        assert!(params.contains(&("keyword", "gym".to_string())));
    }
}
