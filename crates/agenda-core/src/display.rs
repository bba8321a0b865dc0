//! Display Helpers
//!
//! Text and numbers shown by the timer and list surfaces.

use crate::models::AgendaItem;

/// Render seconds as zero-padded `mm:ss`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Elapsed share of the current item, 0 to 100
pub fn progress_percent(remaining: u32, total: u32) -> f64 {
    let total = if total == 0 { 1 } else { total };
    (1.0 - f64::from(remaining) / f64::from(total)) * 100.0
}

/// List row text, e.g. `Intro - Alice (5 min)`
pub fn item_label(item: &AgendaItem) -> String {
    format!("{} - {} ({} min)", item.title, item.speaker, item.duration_minutes)
}
