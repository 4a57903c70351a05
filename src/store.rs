//! Task Page Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! cached page of tasks and the listing parameters.

use leptos::prelude::*;
use reactive_stores::Store;
use task_core::{Task, TaskQuery};

/// Cached page of tasks with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskState {
    /// Tasks of the current page, already sorted/filtered
    pub tasks: Vec<Task>,
    /// Page count reported by the backend
    pub total_pages: u32,
    /// Parameters for the next fetch
    pub query: TaskQuery,
}

impl TaskState {
    pub fn new(page_size: u32) -> Self {
        Self {
            tasks: Vec::new(),
            total_pages: 1,
            query: TaskQuery::new(page_size),
        }
    }
}

/// Type alias for the store
pub type TaskStore = Store<TaskState>;

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a task in the store by ID
pub fn store_update_task(store: &TaskStore, updated: Task) {
    if let Some(task) = store.tasks().write().iter_mut().find(|task| task.id == updated.id) {
        *task = updated;
    }
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &TaskStore, task_id: u64) {
    store.tasks().write().retain(|task| task.id != Some(task_id));
}

/// Change the listing parameters; anything but a page change goes back to page 1
pub fn store_update_query(store: &TaskStore, change: impl FnOnce(&mut TaskQuery)) {
    store.query().update(|query| {
        let page = query.page;
        change(query);
        if query.page == page {
            query.page = 1;
        }
    });
}

pub fn store_set_page(store: &TaskStore, page: u32) {
    store.query().update(|query| query.page = page);
}
