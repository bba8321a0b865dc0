//! UI State Store
//!
//! Editor form and theme state, using Leptos reactive_stores for
//! field-level reactivity. Agenda state itself lives in `AgendaContext`.

use leptos::prelude::*;
use reactive_stores::Store;

use agenda_core::{AgendaItem, ItemDraft, ItemId};

/// Presentation state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Dark display mode
    pub dark_mode: bool,
    /// Item loaded into the editor (None = adding)
    pub editing: Option<ItemId>,
    /// Editor input as typed
    pub draft: ItemDraft,
}

impl UiState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Load an item into the editor
pub fn store_begin_edit(store: &UiStore, item: &AgendaItem) {
    store.editing().set(Some(item.id));
    store.draft().set(ItemDraft::new(
        item.title.clone(),
        item.speaker.clone(),
        item.duration_minutes.to_string(),
    ));
}

/// Empty the form and leave edit mode
pub fn store_clear_draft(store: &UiStore) {
    store.editing().set(None);
    store.draft().set(ItemDraft::default());
}

/// Drop edit mode if it points at a deleted item
pub fn store_forget_item(store: &UiStore, item_id: ItemId) {
    if store.editing().get_untracked() == Some(item_id) {
        store_clear_draft(store);
    }
}
