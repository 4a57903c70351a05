//! Task Tracker Core
//!
//! Task model, form validators, listing query glue and the REST client.
//! Everything here builds for both the browser and the host.

pub mod client;
pub mod config;
pub mod draft;
pub mod error;
pub mod model;
pub mod pagination;
pub mod query;
pub mod session;
pub mod validate;

pub use client::{LoginRequest, RegisterRequest, TaskClient};
pub use config::ClientConfig;
pub use draft::TaskDraft;
pub use error::{ApiError, Result};
pub use model::{Priority, Status, Subtask, Task, TaskPage};
pub use pagination::Pagination;
pub use query::{apply_locally, filter_tasks, sort_tasks, SortKey, SortOrder, TaskQuery};
pub use validate::FormErrors;
