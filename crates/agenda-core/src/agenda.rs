//! Agenda Transitions
//!
//! Every user intent and every timer tick goes through [`reduce`], which
//! returns a new [`TimerState`] and tells the caller what to do with the
//! interval that drives ticks. The input state is never modified, so a
//! rejected intent leaves the agenda exactly as it was.

use tracing::{debug, trace};

use crate::draft::ItemFields;
use crate::error::Rejection;
use crate::models::{AgendaItem, ItemId, Phase, TimerState};

/// Everything that can happen to the agenda
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddItem(ItemFields),
    UpdateItem { id: ItemId, fields: ItemFields },
    DeleteItem(ItemId),
    /// Drag-and-drop move, `from` and `to` are list indices
    ReorderItem { from: usize, to: usize },
    SelectItem(usize),
    Start,
    Pause,
    Reset,
    Next,
    /// One elapsed second
    Tick,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::AddItem(_) => "add_item",
            Intent::UpdateItem { .. } => "update_item",
            Intent::DeleteItem(_) => "delete_item",
            Intent::ReorderItem { .. } => "reorder_item",
            Intent::SelectItem(_) => "select_item",
            Intent::Start => "start",
            Intent::Pause => "pause",
            Intent::Reset => "reset",
            Intent::Next => "next",
            Intent::Tick => "tick",
        }
    }
}

/// What the tick source must do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Drop any scheduled interval and schedule a fresh one
    Restart,
    /// Leave the running interval alone
    Keep,
    /// Release the interval if one is scheduled
    Cancel,
}

/// Result of an accepted intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TimerState,
    pub timer: TimerCommand,
}

/// Apply `intent` to `state`.
///
/// The timer command is derived from the resulting phase: `Start` always
/// restarts the interval, any other transition that ends running keeps it,
/// and everything else cancels it.
pub fn reduce(state: &TimerState, intent: Intent) -> Result<Transition, Rejection> {
    let name = intent.name();
    let is_start = matches!(intent, Intent::Start);
    let is_tick = matches!(intent, Intent::Tick);
    let mut next = state.clone();

    match intent {
        Intent::AddItem(fields) => add_item(&mut next, fields)?,
        Intent::UpdateItem { id, fields } => update_item(&mut next, id, fields)?,
        Intent::DeleteItem(id) => delete_item(&mut next, id)?,
        Intent::ReorderItem { from, to } => reorder_item(&mut next, from, to)?,
        Intent::SelectItem(index) => select_item(&mut next, index)?,
        Intent::Start => start(&mut next)?,
        Intent::Pause => pause(&mut next)?,
        Intent::Reset => reset(&mut next)?,
        Intent::Next => next_item(&mut next)?,
        Intent::Tick => tick(&mut next)?,
    }

    let timer = if !next.is_running() {
        TimerCommand::Cancel
    } else if is_start {
        TimerCommand::Restart
    } else {
        TimerCommand::Keep
    };

    if is_tick {
        trace!(remaining = next.remaining_seconds, current = ?next.current, "[AGENDA] tick");
    } else {
        debug!(
            intent = name,
            phase = ?next.phase,
            current = ?next.current,
            remaining = next.remaining_seconds,
            items = next.items.len(),
            "[AGENDA] applied"
        );
    }

    Ok(Transition { state: next, timer })
}

/// Point the countdown at `index` with its full duration
fn load(state: &mut TimerState, index: usize) {
    state.current = Some(index);
    state.remaining_seconds = state.items[index].duration_seconds();
}

fn check_index(state: &TimerState, index: usize) -> Result<(), Rejection> {
    if index < state.items.len() {
        Ok(())
    } else {
        Err(Rejection::IndexOutOfRange {
            index,
            len: state.items.len(),
        })
    }
}

fn current_index(state: &TimerState) -> Result<usize, Rejection> {
    state.current.ok_or(Rejection::EmptyAgenda)
}

// ========================
// List operations
// ========================

fn add_item(state: &mut TimerState, fields: ItemFields) -> Result<(), Rejection> {
    fields.validate()?;

    let id = ItemId(state.next_id);
    state.next_id += 1;
    state.items.push(AgendaItem {
        id,
        title: fields.title,
        speaker: fields.speaker,
        duration_minutes: fields.duration_minutes,
    });

    // Adding rewinds the timer to the top, paused
    load(state, 0);
    state.phase = Phase::Idle;
    Ok(())
}

fn update_item(state: &mut TimerState, id: ItemId, fields: ItemFields) -> Result<(), Rejection> {
    fields.validate()?;
    let position = state.position_of(id).ok_or(Rejection::UnknownItem(id))?;

    let item = &mut state.items[position];
    item.title = fields.title;
    item.speaker = fields.speaker;
    item.duration_minutes = fields.duration_minutes;
    let total = item.duration_seconds();

    if state.current == Some(position) {
        state.remaining_seconds = match state.phase {
            Phase::Idle => total,
            _ => state.remaining_seconds.min(total),
        };
    }
    Ok(())
}

fn delete_item(state: &mut TimerState, id: ItemId) -> Result<(), Rejection> {
    let position = state.position_of(id).ok_or(Rejection::UnknownItem(id))?;
    state.items.remove(position);

    if state.items.is_empty() {
        state.current = None;
        state.remaining_seconds = 0;
        state.phase = Phase::Idle;
        return Ok(());
    }

    if let Some(current) = state.current {
        if position <= current {
            let index = current.min(state.items.len() - 1);
            load(state, index);
            if state.phase != Phase::Running {
                state.phase = Phase::Idle;
            }
        }
    }
    Ok(())
}

/// Move one item. `current` keeps its numeric position, so the countdown
/// now belongs to whatever item landed in that slot.
fn reorder_item(state: &mut TimerState, from: usize, to: usize) -> Result<(), Rejection> {
    check_index(state, from)?;
    check_index(state, to)?;
    if from == to {
        return Ok(());
    }

    let item = state.items.remove(from);
    state.items.insert(to, item);

    let total = state.current_total_seconds();
    state.remaining_seconds = match state.phase {
        Phase::Idle => total,
        _ => state.remaining_seconds.min(total),
    };
    Ok(())
}

// ========================
// Timer controls
// ========================

fn select_item(state: &mut TimerState, index: usize) -> Result<(), Rejection> {
    if state.is_empty() {
        return Err(Rejection::EmptyAgenda);
    }
    check_index(state, index)?;
    load(state, index);
    state.phase = Phase::Idle;
    Ok(())
}

fn start(state: &mut TimerState) -> Result<(), Rejection> {
    let index = current_index(state)?;
    match state.phase {
        Phase::Running => return Err(Rejection::AlreadyRunning),
        Phase::Idle | Phase::Finished => load(state, index),
        Phase::Paused => {}
    }
    state.phase = Phase::Running;
    Ok(())
}

fn pause(state: &mut TimerState) -> Result<(), Rejection> {
    if !state.is_running() {
        return Err(Rejection::NotRunning);
    }
    state.phase = Phase::Paused;
    Ok(())
}

fn reset(state: &mut TimerState) -> Result<(), Rejection> {
    if state.is_empty() {
        return Err(Rejection::EmptyAgenda);
    }
    load(state, 0);
    state.phase = Phase::Idle;
    Ok(())
}

fn next_item(state: &mut TimerState) -> Result<(), Rejection> {
    let index = current_index(state)?;
    if state.is_last() {
        return Err(Rejection::LastItem);
    }
    load(state, index + 1);
    state.phase = Phase::Idle;
    Ok(())
}

fn tick(state: &mut TimerState) -> Result<(), Rejection> {
    if !state.is_running() {
        return Err(Rejection::NotRunning);
    }
    let index = current_index(state)?;

    state.remaining_seconds = state.remaining_seconds.saturating_sub(1);
    if state.remaining_seconds > 0 {
        return Ok(());
    }

    if index + 1 < state.items.len() {
        load(state, index + 1);
        debug!(current = index + 1, remaining = state.remaining_seconds, "[AGENDA] auto-advance");
    } else {
        state.phase = Phase::Finished;
        debug!(current = index, "[AGENDA] finished");
    }
    Ok(())
}
