//! Item Draft
//!
//! Raw editor text and its validation into item fields.

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Longest duration whose seconds still fit the countdown
const MAX_DURATION_MINUTES: u32 = u32::MAX / 60;

/// Validated fields for a new or updated agenda item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub title: String,
    pub speaker: String,
    pub duration_minutes: u32,
}

/// Editor input exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub title: String,
    pub speaker: String,
    pub duration: String,
}

impl ItemDraft {
    pub fn new(title: impl Into<String>, speaker: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            speaker: speaker.into(),
            duration: duration.into(),
        }
    }

    /// Validate the draft. Surrounding whitespace is ignored.
    pub fn parse(&self) -> Result<ItemFields, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        let speaker = self.speaker.trim();
        if speaker.is_empty() {
            return Err(DraftError::EmptySpeaker);
        }
        let duration_minutes = parse_minutes(&self.duration)?;

        Ok(ItemFields {
            title: title.to_string(),
            speaker: speaker.to_string(),
            duration_minutes,
        })
    }
}

impl ItemFields {
    pub fn new(title: impl Into<String>, speaker: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            title: title.into(),
            speaker: speaker.into(),
            duration_minutes,
        }
    }

    /// Same checks as [`ItemDraft::parse`] for fields built in code
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.speaker.trim().is_empty() {
            return Err(DraftError::EmptySpeaker);
        }
        check_minutes(self.duration_minutes).map(|_| ())
    }
}

fn parse_minutes(raw: &str) -> Result<u32, DraftError> {
    let raw = raw.trim();
    let minutes = raw
        .parse::<i64>()
        .map_err(|_| DraftError::InvalidDuration(raw.to_string()))?;
    if minutes <= 0 {
        return Err(DraftError::NonPositiveDuration);
    }
    u32::try_from(minutes)
        .map_err(|_| DraftError::DurationTooLong(minutes as u64))
        .and_then(check_minutes)
}

fn check_minutes(minutes: u32) -> Result<u32, DraftError> {
    match minutes {
        0 => Err(DraftError::NonPositiveDuration),
        m if m > MAX_DURATION_MINUTES => Err(DraftError::DurationTooLong(m as u64)),
        m => Ok(m),
    }
}
