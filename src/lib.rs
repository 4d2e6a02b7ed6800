//! Todo List Frontend
//!
//! Leptos CSR to-do list: add, toggle, edit, filter and hide items, with the
//! whole list persisted to localStorage.

pub mod app;
pub mod commands;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod filter;
pub mod models;
pub mod state;
pub mod storage;

use leptos::prelude::*;

use app::App;
use config::AppConfig;

/// Install panic hook and logger, then mount the app on `<body>`
pub fn start() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(e) = rolling_logger::init(config.level_filter(), config.log_capacity) {
        web_sys::console::warn_1(&format!("[APP] Logger already set: {}", e).into());
    }
    log::info!("[APP] Starting, storage key {:?}", config.storage_key);

    mount_to_body(move || view! { <App config=config /> });
}
