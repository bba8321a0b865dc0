//! Item Editor Component
//!
//! Form for adding agenda items and editing an existing one.

use leptos::prelude::*;
use tracing::debug;

use agenda_core::Intent;

use crate::context::AgendaContext;
use crate::store::{store_clear_draft, use_ui_store, UiStateStoreFields};

/// Title / speaker / duration form
#[component]
pub fn ItemEditor() -> impl IntoView {
    let ctx = use_context::<AgendaContext>().expect("AgendaContext should be provided");
    let store = use_ui_store();

    let is_editing = move || store.editing().get().is_some();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = match store.draft().get_untracked().parse() {
            Ok(fields) => fields,
            Err(err) => {
                debug!(%err, "[EDITOR] submission ignored");
                return;
            }
        };
        let intent = match store.editing().get_untracked() {
            Some(id) => Intent::UpdateItem { id, fields },
            None => Intent::AddItem(fields),
        };
        if ctx.dispatch(intent) {
            store_clear_draft(&store);
        }
    };

    view! {
        <section class="card editor-card">
            <h2 class="card-title">
                {move || if is_editing() { "Edit Agenda Item" } else { "Add Agenda Item" }}
            </h2>
            <form class="item-editor" on:submit=submit>
                <input
                    type="text"
                    placeholder="Agenda Title"
                    prop:value=move || store.draft().with(|d| d.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        store.draft().update(|d| d.title = value);
                    }
                />
                <input
                    type="text"
                    placeholder="Speaker Name"
                    prop:value=move || store.draft().with(|d| d.speaker.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        store.draft().update(|d| d.speaker = value);
                    }
                />
                <input
                    type="number"
                    min="1"
                    step="1"
                    placeholder="Duration (minutes)"
                    prop:value=move || store.draft().with(|d| d.duration.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        store.draft().update(|d| d.duration = value);
                    }
                />
                <div class="editor-actions">
                    <button type="submit" class="primary-btn">
                        {move || if is_editing() { "Update Item" } else { "Add Item" }}
                    </button>
                    <Show when=is_editing>
                        <button type="button" class="cancel-btn" on:click=move |_| store_clear_draft(&store)>
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
        </section>
    }
}
