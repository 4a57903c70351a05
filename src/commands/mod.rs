//! Backend Command Wrappers
//!
//! Frontend bindings to the task API, organized by domain. Errors are
//! flattened to display strings for the components; commands backing a
//! form return only what the form may show.

mod auth;
mod task;

use std::cell::RefCell;

use task_core::{ClientConfig, TaskClient};

thread_local! {
    static CLIENT: RefCell<Option<TaskClient>> = const { RefCell::new(None) };
}

/// Build the shared API client. Must run before any command.
pub fn init(config: &ClientConfig) -> Result<(), String> {
    let client = TaskClient::new(config).map_err(|e| e.to_string())?;
    CLIENT.with(|slot| *slot.borrow_mut() = Some(client));
    Ok(())
}

fn client() -> Result<TaskClient, String> {
    CLIENT
        .with(|slot| slot.borrow().clone())
        .ok_or_else(|| "API client is not initialized".to_string())
}

// Re-export all public items
pub use auth::*;
pub use task::*;
