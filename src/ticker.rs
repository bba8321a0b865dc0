//! Interval Ticker
//!
//! The browser side of the tick session: one `setInterval` at a time.

use std::rc::Rc;

use agenda_core::Ticker;
use gloo_timers::callback::Interval;
use tracing::warn;

pub struct IntervalTicker {
    period_ms: u32,
    on_tick: Option<Rc<dyn Fn()>>,
    handle: Option<Interval>,
}

impl IntervalTicker {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            on_tick: None,
            handle: None,
        }
    }

    /// Set the tick callback. Must happen before the first `arm`.
    pub fn bind(&mut self, on_tick: impl Fn() + 'static) {
        self.on_tick = Some(Rc::new(on_tick));
    }
}

impl Ticker for IntervalTicker {
    fn arm(&mut self) {
        let Some(on_tick) = self.on_tick.clone() else {
            warn!("[TICKER] armed before a callback was bound");
            return;
        };
        self.handle = Some(Interval::new(self.period_ms, move || on_tick()));
    }

    fn disarm(&mut self) {
        // Dropping the handle clears the interval
        self.handle.take();
    }

    fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}
