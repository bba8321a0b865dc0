//! Agenda Timer App
//!
//! Editor and agenda list side by side, timer underneath.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AgendaList, ItemEditor, ThemeToggle, TimerDisplay};
use crate::config::AppConfig;
use crate::context::AgendaContext;
use crate::store::{UiState, UiStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let ctx = AgendaContext::new(&config);
    let store = Store::new(UiState::new(config.dark_mode));

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // No tick may outlive the component
    on_cleanup(move || ctx.shutdown());

    // Mirror the theme onto <body>
    Effect::new(move |_| {
        let dark = store.dark_mode().get();
        if let Some(body) = document().body() {
            let _ = body.class_list().toggle_with_force("dark", dark);
        }
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"⏰ Time Keeper"</h1>
                <ThemeToggle />
            </header>

            <div class="app-columns">
                <ItemEditor />
                <AgendaList />
            </div>

            <TimerDisplay />
        </div>
    }
}
