//! Agenda Models
//!
//! Agenda items and the timer state that owns them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique agenda item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One talk slot on the agenda
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgendaItem {
    pub id: ItemId,
    pub title: String,
    pub speaker: String,
    /// Always at least one minute
    pub duration_minutes: u32,
}

impl AgendaItem {
    /// Full countdown length for this item
    pub fn duration_seconds(&self) -> u32 {
        self.duration_minutes * 60
    }
}

/// Countdown phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No items, or the current item is loaded but not started
    #[default]
    Idle,
    Running,
    /// Interrupted mid-item; start resumes from `remaining_seconds`
    Paused,
    /// The last item reached zero
    Finished,
}

/// Agenda list plus countdown position
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimerState {
    pub items: Vec<AgendaItem>,
    /// `None` exactly when `items` is empty
    pub current: Option<usize>,
    pub remaining_seconds: u32,
    pub phase: Phase,
    /// Next id to hand out; never reused
    pub next_id: u32,
}

impl TimerState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_item(&self) -> Option<&AgendaItem> {
        self.current.and_then(|index| self.items.get(index))
    }

    /// Countdown length of the current item, 0 when there is none
    pub fn current_total_seconds(&self) -> u32 {
        self.current_item().map_or(0, AgendaItem::duration_seconds)
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn is_last(&self) -> bool {
        match self.current {
            Some(index) => index + 1 >= self.items.len(),
            None => true,
        }
    }

    // Control enablement

    pub fn can_start(&self) -> bool {
        !self.is_empty() && !self.is_running()
    }

    pub fn can_pause(&self) -> bool {
        self.is_running()
    }

    pub fn can_next(&self) -> bool {
        !self.is_last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, minutes: u32) -> AgendaItem {
        AgendaItem {
            id: ItemId(id),
            title: format!("Talk {}", id),
            speaker: "Speaker".to_string(),
            duration_minutes: minutes,
        }
    }

    #[test]
    fn test_empty_state() {
        let state = TimerState::new();
        assert!(state.is_empty());
        assert!(state.current_item().is_none());
        assert_eq!(state.current_total_seconds(), 0);
        assert!(!state.can_start());
        assert!(!state.can_pause());
        assert!(!state.can_next());
        assert_eq!(state.next_id, 1);
    }

    #[test]
    fn test_control_enablement() {
        let mut state = TimerState::new();
        state.items = vec![item(1, 1), item(2, 2)];
        state.current = Some(0);
        assert!(state.can_start());
        assert!(state.can_next());

        state.phase = Phase::Running;
        assert!(!state.can_start());
        assert!(state.can_pause());

        state.current = Some(1);
        assert!(!state.can_next());
        assert_eq!(state.current_total_seconds(), 120);
    }

    #[test]
    fn test_phase_serializes_lowercase() {
        let json = serde_json::to_string(&Phase::Finished).unwrap();
        assert_eq!(json, "\"finished\"");
        assert_eq!(serde_json::to_string(&ItemId(7)).unwrap(), "7");
    }
}
