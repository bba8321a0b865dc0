//! Application Context
//!
//! Shared agenda state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, warn};

use agenda_core::{Intent, Session, TimerState};

use crate::config::AppConfig;
use crate::ticker::IntervalTicker;

/// Agenda signals and the tick session behind them
#[derive(Clone, Copy)]
pub struct AgendaContext {
    /// Latest accepted state - read
    pub state: ReadSignal<TimerState>,
    /// Latest accepted state - write
    set_state: WriteSignal<TimerState>,
    /// Owns the authoritative state and the interval handle
    session: StoredValue<Session<IntervalTicker>, LocalStorage>,
}

impl AgendaContext {
    pub fn new(config: &AppConfig) -> Self {
        let (state, set_state) = signal(TimerState::new());
        let session = StoredValue::new_local(Session::new(IntervalTicker::new(config.tick_period_ms())));
        let ctx = Self { state, set_state, session };

        // The interval only queues the tick, so the handle is never
        // dropped from inside its own callback
        session.update_value(|session| {
            session.ticker_mut().bind(move || {
                spawn_local(async move {
                    ctx.dispatch(Intent::Tick);
                });
            });
        });
        ctx
    }

    /// Apply an intent. Returns false when it was rejected.
    pub fn dispatch(&self, intent: Intent) -> bool {
        let name = intent.name();
        let outcome = self
            .session
            .try_update_value(|session| session.dispatch(intent).map(Clone::clone));

        match outcome {
            Some(Ok(state)) => {
                self.set_state.set(state);
                true
            }
            Some(Err(rejection)) => {
                debug!(intent = name, %rejection, "[TIMER] rejected");
                false
            }
            None => {
                warn!(intent = name, "[TIMER] session already disposed");
                false
            }
        }
    }

    /// Release the interval on teardown
    pub fn shutdown(&self) {
        self.session.try_update_value(|session| session.shutdown());
    }
}
