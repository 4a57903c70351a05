//! Task API Client
//!
//! Thin wrappers over the backend's REST endpoints. In the browser the
//! requests go through `fetch` with credentials included so the session
//! cookie travels with every call.

use log::{debug, warn};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::model::{Task, TaskPage};
use crate::query::TaskQuery;

// ========================
// Endpoints
// ========================

pub const REGISTER_ENDPOINT: &str = "api/auth/register";
pub const LOGIN_ENDPOINT: &str = "api/auth/login";
pub const SIGNOUT_ENDPOINT: &str = "api/auth/signout";
pub const TASKS_ENDPOINT: &str = "api/tasks";

// ========================
// Request / Response Bodies
// ========================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

/// Create/update answer either with the task itself or `{ "task": ... }`
#[derive(Deserialize)]
#[serde(untagged)]
enum TaskEnvelope {
    Wrapped { task: Task },
    Bare(Task),
}

impl TaskEnvelope {
    fn into_task(self) -> Task {
        match self {
            TaskEnvelope::Wrapped { task } | TaskEnvelope::Bare(task) => task,
        }
    }
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct TaskClient {
    http: Client,
    base_url: Url,
}

impl TaskClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Self::with_base_url(&config.base_url)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        // Endpoints are relative, so the base must end in '/' to keep any path prefix
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self {
            http: Client::builder().build()?,
            base_url: Url::parse(&base)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        debug!("{} {}", method, url);
        Ok(self.http.request(method, url))
    }

    /// Send and turn non-2xx answers into `ApiError::Backend`
    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageBody>(&body)
            .map(|b| b.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Request failed").to_string());
        warn!("request failed with {}: {}", status, message);
        Err(ApiError::backend(status, message))
    }

    async fn decode<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    // ========================
    // Auth
    // ========================

    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let builder = self.request(Method::POST, REGISTER_ENDPOINT)?.json(request);
        self.execute(builder).await?;
        Ok(())
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<()> {
        let builder = self.request(Method::POST, LOGIN_ENDPOINT)?.json(request);
        self.execute(builder).await?;
        Ok(())
    }

    pub async fn sign_out(&self) -> Result<()> {
        let builder = self.request(Method::GET, SIGNOUT_ENDPOINT)?;
        self.execute(builder).await?;
        Ok(())
    }

    // ========================
    // Tasks
    // ========================

    pub async fn list_tasks(&self, query: &TaskQuery) -> Result<TaskPage> {
        let builder = self
            .request(Method::GET, TASKS_ENDPOINT)?
            .query(&query.to_params());
        let response = self.execute(builder).await?;
        let page: TaskPage = Self::decode(response).await?;
        debug!("loaded {} tasks, {} pages", page.tasks.len(), page.total_pages);
        Ok(page)
    }

    pub async fn create_task(&self, task: &Task) -> Result<Task> {
        let builder = self.request(Method::POST, TASKS_ENDPOINT)?.json(task);
        let response = self.execute(builder).await?;
        Ok(Self::decode::<TaskEnvelope>(response).await?.into_task())
    }

    pub async fn update_task(&self, task: &Task) -> Result<Task> {
        let id = task.id.ok_or(ApiError::MissingId)?;
        let builder = self
            .request(Method::PUT, &format!("{TASKS_ENDPOINT}/{id}"))?
            .json(task);
        let response = self.execute(builder).await?;
        Ok(Self::decode::<TaskEnvelope>(response).await?.into_task())
    }

    pub async fn delete_task(&self, id: u64) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("{TASKS_ENDPOINT}/{id}"))?;
        self.execute(builder).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_keeps_prefix() {
        let client = TaskClient::with_base_url("https://example.com/tracker").unwrap();
        let url = client.base_url().join(TASKS_ENDPOINT).unwrap();
        assert_eq!(url.as_str(), "https://example.com/tracker/api/tasks");
    }

    #[test]
    fn test_task_envelope_shapes() {
        let bare: TaskEnvelope = serde_json::from_str(r#"{"taskID": 1, "title": "a"}"#).unwrap();
        assert_eq!(bare.into_task().id, Some(1));
        let wrapped: TaskEnvelope =
            serde_json::from_str(r#"{"task": {"taskID": 2, "title": "b"}}"#).unwrap();
        assert_eq!(wrapped.into_task().title, "b");
    }
}
