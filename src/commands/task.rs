//! Task Commands
//!
//! Frontend bindings for the task endpoints.

use task_core::{apply_locally, Task, TaskQuery};

use super::client;

/// Tasks of one page after the local sort/filter pass, plus the page count
pub async fn fetch_tasks(query: &TaskQuery) -> Result<(Vec<Task>, u32), String> {
    let client = client()?;
    let page = client.list_tasks(query).await.map_err(|e| {
        if e.is_auth_error() {
            log::info!("session rejected while listing tasks: {}", e);
        }
        e.to_string()
    })?;
    let tasks = apply_locally(page.tasks, query);
    Ok((tasks, page.total_pages))
}

/// Errors carry the text the create form may show
pub async fn create_task(task: &Task) -> Result<Task, String> {
    let client = client()?;
    client.create_task(task).await.map_err(|e| {
        log::error!("Error creating task: {}", e);
        e.form_message().to_string()
    })
}

pub async fn update_task(task: &Task) -> Result<Task, String> {
    let client = client()?;
    client.update_task(task).await.map_err(|e| e.to_string())
}

pub async fn delete_task(id: u64) -> Result<(), String> {
    let client = client()?;
    client.delete_task(id).await.map_err(|e| e.to_string())
}

/// Mark a task and all its subtasks completed on the backend
pub async fn complete_task(task: &Task) -> Result<Task, String> {
    let mut completed = task.clone();
    completed.mark_completed();
    update_task(&completed).await
}

/// Save an edited task, deriving completion from its subtasks first
pub async fn save_task_edit(task: &Task) -> Result<Task, String> {
    let mut edited = task.clone();
    edited.recompute_completion();
    update_task(&edited).await
}
