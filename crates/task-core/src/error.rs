//! Client error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Shown in a form when the failure carries no message from the backend
pub const GENERIC_FORM_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure (connection refused, CORS, aborted fetch)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response. `message` is the backend's own text when it sent one.
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Update or delete of a task the backend never stored
    #[error("task has no backend id")]
    MissingId,
}

impl ApiError {
    pub fn backend(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Backend {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// Raw backend message, for showing inside a form
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Backend { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Text for a form's error line. Transport and decode details stay in the log.
    pub fn form_message(&self) -> &str {
        self.backend_message().unwrap_or(GENERIC_FORM_ERROR)
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Backend { status: 401 | 403, .. })
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
