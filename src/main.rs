//! Deadline To-Do Entry Point

mod app;
mod components;
mod config;
mod context;
mod deadline;
mod error;
mod models;
mod prompt;
mod query;
mod storage;
mod store;
mod summary;
mod tasks;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    init_logging(AppConfig::default().log_level);
    mount_to_body(App);
}

#[cfg(target_arch = "wasm32")]
fn init_logging(level: log::Level) {
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(_level: log::Level) {}
