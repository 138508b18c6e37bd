//! Record Editor Frontend Entry Point

mod models;
mod error;
mod parse;
mod list;
mod form;
mod config;
mod logger;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(err) = logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] console logger not installed: {}", err).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
