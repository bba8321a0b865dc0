//! Application Configuration
//!
//! Optional JSON settings embedded in the host page:
//!
//! ```html
//! <script id="agenda-timer-config" type="application/json">
//!   { "tick_ms": 1000, "dark_mode": true, "log_level": "debug" }
//! </script>
//! ```

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

/// Id of the `<script>` element holding the config
pub const CONFIG_ELEMENT_ID: &str = "agenda-timer-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tick period in milliseconds
    pub tick_ms: u32,
    /// Start in dark mode
    pub dark_mode: bool,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            dark_mode: false,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the config element, falling back to defaults.
    /// A parse failure is handed back so it can be logged once logging is up.
    pub fn load() -> (Self, Option<serde_json::Error>) {
        let raw = leptos::prelude::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
            _ => (Self::default(), None),
        }
    }

    /// Never zero, so the interval cannot spin
    pub fn tick_period_ms(&self) -> u32 {
        self.tick_ms.max(1)
    }

    /// Unknown levels fall back to `info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.trim().parse().unwrap_or(LevelFilter::INFO)
    }
}
