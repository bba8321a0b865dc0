//! UI Components
//!
//! Reusable Leptos components.

mod agenda_list;
mod confirm_delete_item;
mod item_editor;
mod theme_toggle;
mod timer_display;

pub use agenda_list::AgendaList;
pub use confirm_delete_item::ConfirmDeleteItem;
pub use item_editor::ItemEditor;
pub use theme_toggle::ThemeToggle;
pub use timer_display::TimerDisplay;
