//! Confirm Delete Item Component
//!
//! Trash button that asks before an agenda item is removed.

use leptos::prelude::*;

use agenda_core::{AgendaItem, ItemId};

use crate::context::AgendaContext;

/// Inline "Delete <title>?" prompt for one agenda row
///
/// Nothing is dispatched until the prompt is confirmed. Removing the item
/// the countdown is running on adds a note that the timer carries on with
/// the item that takes its place.
#[component]
pub fn ConfirmDeleteItem(
    item: AgendaItem,
    #[prop(into)] on_confirm: Callback<ItemId>,
) -> impl IntoView {
    let ctx = use_context::<AgendaContext>().expect("AgendaContext should be provided");
    let asking = RwSignal::new(false);

    let id = item.id;
    let prompt = format!("Delete \"{}\"?", item.title);

    let counting_down_on_item = move || {
        ctx.state.with(|s| s.is_running() && s.current_item().is_some_and(|current| current.id == id))
    };

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button
                    class="delete-btn"
                    title="Delete item"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        asking.set(true);
                    }
                >
                    "🗑"
                </button>
            }
        >
            <span class="delete-confirm" role="alertdialog" on:click=|ev| ev.stop_propagation()>
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <Show when=counting_down_on_item>
                    <span class="delete-confirm-note">"The timer moves on to the item that takes its place."</span>
                </Show>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        asking.set(false);
                        on_confirm.run(id);
                    }
                >
                    "Delete"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        asking.set(false);
                    }
                >
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}
