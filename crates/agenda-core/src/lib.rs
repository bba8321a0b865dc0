//! Agenda Timer Core
//!
//! The agenda list and countdown engine as a pure state machine.
//! Everything here is free of browser types so it can be tested natively.

pub mod agenda;
pub mod display;
pub mod draft;
pub mod error;
pub mod models;
pub mod session;

pub use agenda::{reduce, Intent, TimerCommand, Transition};
pub use display::{format_clock, item_label, progress_percent};
pub use draft::{ItemDraft, ItemFields};
pub use error::{DraftError, Rejection};
pub use models::{AgendaItem, ItemId, Phase, TimerState};
pub use session::{Session, Ticker};
