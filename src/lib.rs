//! Todo Web Client
//!
//! Browser frontend for the todo API, built with Leptos:
//! - api: `TodoApi` trait and its HTTP implementation
//! - controller: messages, render cycle, dispatch
//! - store / context: reactive state shared by the components
//! - components: the rendered page

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod models;
pub mod store;

use leptos::prelude::*;

use app::App;
use config::AppConfig;

/// Install panic and log hooks, then mount the app on `<body>`.
pub fn run() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("[app] logger init failed: {}", e).into());
    }
    log::info!("[app] starting, api={}", config.api.collection_url());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
