//! Listkeeper Frontend Entry Point

mod app;
mod components;
mod context;
mod display;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use listkeeper_core::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = rolling_logger::init_logger("Listkeeper", config.log_capacity, config.level_filter()) {
        web_sys::console::warn_1(&format!("[APP] logger already set: {}", e).into());
    }

    mount_to_body(App);
}
