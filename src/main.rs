//! Task Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod models;
mod notify;
mod state;
mod workflow;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::error_1(&format!("[App] logger already installed: {}", err).into());
    }

    let api = config.api;
    mount_to_body(move || view! { <App config=api /> });
}
