//! Theme Toggle Component
//!
//! Light/dark switch. Purely presentational.

use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <label class="theme-toggle" title="Dark mode">
            <span class="theme-icon sun">"☀"</span>
            <input
                type="checkbox"
                role="switch"
                prop:checked=move || store.dark_mode().get()
                on:change=move |ev| store.dark_mode().set(event_target_checked(&ev))
            />
            <span class="theme-icon moon">"☾"</span>
        </label>
    }
}
