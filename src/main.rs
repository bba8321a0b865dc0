//! Agenda Timer Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod store;
mod ticker;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load();
    logging::init(config.level_filter());
    if let Some(err) = config_error {
        tracing::warn!(%err, "[APP] ignoring malformed config, using defaults");
    }
    tracing::info!(tick_ms = config.tick_period_ms(), "[APP] starting");

    mount_to_body(move || view! { <App config=config /> });
}
