//! Agenda List Component
//!
//! Displays agenda items in order with drag-and-drop reordering.
//! Uses leptos-dragdrop with explicit drop slots between rows.

use leptos::prelude::*;
use tracing::debug;

use agenda_core::{item_label, AgendaItem, Intent, ItemId};

use crate::components::ConfirmDeleteItem;
use crate::context::AgendaContext;
use crate::store::{store_begin_edit, store_forget_item, use_ui_store};

use leptos_dragdrop::*;

/// Reorderable agenda list
#[component]
pub fn AgendaList() -> impl IntoView {
    let ctx = use_context::<AgendaContext>().expect("AgendaContext should be provided");

    // Create DnD signals
    let dnd = create_dnd_signals();

    // Document listeners live as long as the list does
    let listeners = bind_global_listeners(
        dnd,
        move || ctx.state.with_untracked(|s| s.items.len()),
        move |from, to| {
            debug!(from, to, "[DND] reorder");
            ctx.dispatch(Intent::ReorderItem { from, to });
        },
    );
    StoredValue::new_local(listeners);

    // Index is part of the key so rows re-render when they shift
    let rows = move || {
        ctx.state.with(|s| s.items.iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <section class="card list-card">
            <h2 class="card-title">"Agenda List"</h2>
            <ul class="agenda-list">
                <DropSlot dnd=dnd slot=0 />
                <For
                    each=rows
                    key=|(index, item)| (*index, item.clone())
                    children=move |(index, item)| {
                        view! {
                            <AgendaRow dnd=dnd index=index item=item />
                            <DropSlot dnd=dnd slot=index + 1 />
                        }
                    }
                />
            </ul>
        </section>
    }
}

/// One agenda row: select on click, edit, delete, drag handle
#[component]
fn AgendaRow(dnd: DndSignals, index: usize, item: AgendaItem) -> impl IntoView {
    let ctx = use_context::<AgendaContext>().expect("AgendaContext should be provided");
    let store = use_ui_store();

    let label = item_label(&item);
    let confirm_item = item.clone();

    let on_mousedown = make_on_mousedown(dnd, index);
    let on_mouseenter = make_on_item_mouseenter(dnd, index);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Visual state
    let is_current = move || ctx.state.with(|s| s.current == Some(index));
    let is_dragging = move || dnd.dragging_read.get() == Some(index);
    let is_drop_target = move || dnd.drop_target_read.get() == Some(DropTarget::Item(index));

    let row_class = move || {
        let mut c = String::from("agenda-row");
        if is_current() { c.push_str(" current"); }
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    let on_delete = Callback::new(move |id: ItemId| {
        if ctx.dispatch(Intent::DeleteItem(id)) {
            store_forget_item(&store, id);
        }
    });

    view! {
        <li
            class=row_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=move |_| {
                // The mouseup of a drag also produces a click
                if dnd.drag_just_ended_read.get_untracked() { return; }
                ctx.dispatch(Intent::SelectItem(index));
            }
        >
            <span class="drag-handle">"⋮⋮"</span>
            <span class="agenda-label">{label}</span>
            <span class="row-actions">
                <button
                    class="edit-btn"
                    title="Edit"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        store_begin_edit(&store, &item);
                    }
                >
                    "✎"
                </button>
                <ConfirmDeleteItem item=confirm_item on_confirm=on_delete />
            </span>
        </li>
    }
}

/// Drop slot - a horizontal gap row for dropping items
#[component]
fn DropSlot(dnd: DndSignals, slot: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || dnd.drop_target_read.get() == Some(DropTarget::Slot(slot));
    let is_dragging = move || dnd.dragging_read.get().is_some();

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <li
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
