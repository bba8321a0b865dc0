//! Rejection Types
//!
//! Invalid intents never reach the user as errors. They are rejected
//! without touching state, and the reason is kept for logging.

use thiserror::Error;

use crate::models::ItemId;

/// Why a form submission could not become an agenda item
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("title is empty")]
    EmptyTitle,

    #[error("speaker is empty")]
    EmptySpeaker,

    #[error("duration {0:?} is not a whole number of minutes")]
    InvalidDuration(String),

    #[error("duration must be at least one minute")]
    NonPositiveDuration,

    #[error("duration of {0} minutes is too long")]
    DurationTooLong(u64),
}

/// Why an intent left the agenda unchanged
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Timer controls need at least one item
    #[error("agenda is empty")]
    EmptyAgenda,

    #[error("no agenda item with id {0}")]
    UnknownItem(ItemId),

    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("timer is already running")]
    AlreadyRunning,

    /// Pause or a stale tick while the countdown is stopped
    #[error("timer is not running")]
    NotRunning,

    #[error("already on the last item")]
    LastItem,

    #[error("invalid item: {0}")]
    InvalidDraft(#[from] DraftError),
}
