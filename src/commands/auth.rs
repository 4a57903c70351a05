//! Auth Commands
//!
//! Register, login and sign-out calls plus session cookie detection.

use task_core::session::token_from_cookie;
use task_core::{LoginRequest, RegisterRequest};
use wasm_bindgen::JsCast;

use super::client;

pub async fn register(request: &RegisterRequest) -> Result<(), String> {
    let client = client()?;
    client.register(request).await.map_err(|e| {
        log::warn!("register failed for {}: {}", request.username, e);
        e.form_message().to_string()
    })?;
    log::info!("registered {}", request.username);
    Ok(())
}

pub async fn login(request: &LoginRequest) -> Result<(), String> {
    let client = client()?;
    client.login(request).await.map_err(|e| {
        log::warn!("login failed for {}: {}", request.username, e);
        e.form_message().to_string()
    })?;
    log::info!("logged in as {}", request.username);
    Ok(())
}

pub async fn sign_out() -> Result<(), String> {
    let client = client()?;
    client.sign_out().await.map_err(|e| e.to_string())
}

/// Session token from `document.cookie`, if the backend's cookie is readable
pub fn session_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookie = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    token_from_cookie(&cookie)
}
