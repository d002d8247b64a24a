//! Neko Gallery Entry Point

mod models;
mod catalog;
mod favorites;
mod storage;
mod config;
mod controller;
mod logging;
mod context;
mod components;
mod app;

use app::App;
use config::GalleryConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = GalleryConfig::default();
    logging::init(config.log_level);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
