//! Timer Display Component
//!
//! Current item, countdown, progress bar and timer controls.

use leptos::prelude::*;

use agenda_core::{format_clock, progress_percent, Intent, Phase};

use crate::context::AgendaContext;

#[component]
pub fn TimerDisplay() -> impl IntoView {
    let ctx = use_context::<AgendaContext>().expect("AgendaContext should be provided");
    let state = ctx.state;

    let has_items = move || state.with(|s| !s.is_empty());

    let heading = move || {
        state.with(|s| {
            s.current_item()
                .map(|item| format!("{} - {}", item.title, item.speaker))
                .unwrap_or_default()
        })
    };
    let clock = move || state.with(|s| format_clock(s.remaining_seconds));
    let progress_style = move || {
        let percent = state.with(|s| progress_percent(s.remaining_seconds, s.current_total_seconds()));
        format!("width: {:.1}%;", percent)
    };
    let phase_class = move || match state.with(|s| s.phase) {
        Phase::Idle => "timer-clock idle",
        Phase::Running => "timer-clock running",
        Phase::Paused => "timer-clock paused",
        Phase::Finished => "timer-clock finished",
    };

    view! {
        <section class="card timer-card">
            <h2 class="card-title">"Timer"</h2>
            <Show
                when=has_items
                fallback=|| view! {
                    <p class="timer-empty">"No agenda items added yet. Add some items to start the timer."</p>
                }
            >
                <div class="timer-body">
                    <h3 class="timer-current">{heading}</h3>
                    <div class=phase_class>{clock}</div>
                    <div class="progress">
                        <div class="progress-indicator" style=progress_style></div>
                    </div>
                    <div class="timer-controls">
                        <button
                            disabled=move || !state.with(|s| s.can_start())
                            on:click=move |_| { ctx.dispatch(Intent::Start); }
                        >
                            "Start"
                        </button>
                        <button
                            disabled=move || !state.with(|s| s.can_pause())
                            on:click=move |_| { ctx.dispatch(Intent::Pause); }
                        >
                            "Pause"
                        </button>
                        <button on:click=move |_| { ctx.dispatch(Intent::Reset); }>
                            "Reset"
                        </button>
                        <button
                            disabled=move || !state.with(|s| s.can_next())
                            on:click=move |_| { ctx.dispatch(Intent::Next); }
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            </Show>
        </section>
    }
}
