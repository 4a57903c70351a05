#![allow(warnings)]
//! Task Tracker Frontend Entry Point

mod logger;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use task_core::ClientConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[APP] Bad build configuration, using defaults: {}", e).into());
        ClientConfig::default()
    });
    if let Err(e) = logger::init(config.log_level()) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    if let Err(e) = commands::init(&config) {
        log::error!("API client init failed: {}", e);
    }
    log::info!("Task tracker starting against {}", config.base_url);

    let page_size = config.page_size;
    mount_to_body(move || view! { <App page_size=page_size /> });
}
