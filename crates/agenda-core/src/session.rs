//! Tick Session
//!
//! Owns the agenda state together with the one interval that feeds it
//! ticks, and keeps the two in step: the interval is armed exactly while
//! the countdown is running.

use tracing::debug;

use crate::agenda::{reduce, Intent, TimerCommand};
use crate::error::Rejection;
use crate::models::{Phase, TimerState};

/// A repeating one-second tick source
pub trait Ticker {
    /// Schedule ticks. Callers disarm first, so at most one schedule exists.
    fn arm(&mut self);

    /// Release the schedule. Must be safe to call when nothing is armed.
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;
}

/// Agenda state plus its tick source
pub struct Session<T: Ticker> {
    state: TimerState,
    ticker: T,
}

impl<T: Ticker> Session<T> {
    pub fn new(ticker: T) -> Self {
        Self::with_state(TimerState::new(), ticker)
    }

    /// A restored state is never running until started again
    pub fn with_state(mut state: TimerState, mut ticker: T) -> Self {
        if state.is_running() {
            state.phase = Phase::Paused;
        }
        ticker.disarm();
        Self { state, ticker }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    /// Apply an intent and bring the ticker in line with the result
    pub fn dispatch(&mut self, intent: Intent) -> Result<&TimerState, Rejection> {
        let transition = reduce(&self.state, intent)?;
        self.state = transition.state;

        match transition.timer {
            TimerCommand::Restart => {
                self.ticker.disarm();
                self.ticker.arm();
                debug!("[SESSION] ticker armed");
            }
            TimerCommand::Cancel => {
                if self.ticker.is_armed() {
                    self.ticker.disarm();
                    debug!("[SESSION] ticker released");
                }
            }
            TimerCommand::Keep => {}
        }

        Ok(&self.state)
    }

    /// Release the ticker on teardown
    pub fn shutdown(&mut self) {
        self.ticker.disarm();
        debug!("[SESSION] shut down");
    }
}

#[cfg(test)]
mod tests;
