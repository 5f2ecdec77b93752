//! Todo Frontend Entry Point

mod app;
mod components;
mod config;
mod error;
mod models;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    mount_to_body(App);
}
