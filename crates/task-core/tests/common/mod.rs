//! Shared fixtures for the client tests

use serde_json::{json, Value};
use task_core::TaskClient;
use wiremock::MockServer;

pub async fn setup_mock_server() -> (MockServer, TaskClient) {
    let server = MockServer::start().await;
    let client = TaskClient::with_base_url(&server.uri()).expect("client for mock server");
    (server, client)
}

/// A stored task document as the backend returns it
pub fn task_json(id: u64, title: &str, priority: &str, due_date: &str) -> Value {
    json!({
        "taskID": id,
        "title": title,
        "description": format!("{title} details"),
        "priority": priority,
        "dueDate": due_date,
        "completed": false,
        "status": "pending",
        "subtasks": [],
    })
}
