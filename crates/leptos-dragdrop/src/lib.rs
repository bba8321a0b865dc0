//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for a flat Leptos list using mouse events.
//! Uses movement threshold to distinguish click from drag, and reports
//! every completed drop as a `(source, destination)` index pair.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on a row (take that row's index)
    Item(usize),
    /// Drop on the gap before `slot` (`slot == len` is the end of the list)
    Slot(usize),
}

impl DropTarget {
    /// Destination index for an item dragged from `source`, or `None`
    /// when the drop would leave the list unchanged
    pub fn destination(self, source: usize, len: usize) -> Option<usize> {
        match self {
            DropTarget::Item(index) if index < len && index != source => Some(index),
            DropTarget::Item(_) => None,
            DropTarget::Slot(slot) => slot_to_destination(source, slot, len),
        }
    }
}

/// Convert an insertion gap into the index the item ends up at once it
/// has been removed from `source`
pub fn slot_to_destination(source: usize, slot: usize, len: usize) -> Option<usize> {
    if source >= len || slot > len {
        return None;
    }
    let destination = if slot > source { slot - 1 } else { slot };
    (destination != source).then_some(destination)
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long the click after a drop is ignored
const CLICK_SUPPRESS_MS: i32 = 100;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    let was_dragging = dnd.dragging_read.get_untracked().is_some();
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    if !was_dragging {
        return;
    }

    // Swallow the click that follows the mouseup of a real drag
    dnd.drag_just_ended_write.set(true);
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            // The list may have been unmounted before the timeout fires
            clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), CLICK_SUPPRESS_MS);
        cb.forget();
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(index));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for rows
pub fn make_on_item_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != index {
                dnd.drop_target_write.set(Some(DropTarget::Item(index)));
            }
        }
    }
}

/// Create mouseenter handler for gaps between rows
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(slot)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

type MouseClosure = wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MouseEvent)>;

/// Document-level listeners installed by [`bind_global_listeners`].
/// Dropping this removes them again.
#[must_use = "the listeners are removed as soon as this is dropped"]
pub struct GlobalListeners {
    document: Option<web_sys::Document>,
    mousemove: MouseClosure,
    mouseup: MouseClosure,
}

impl GlobalListeners {
    fn attach(mousemove: MouseClosure, mouseup: MouseClosure) -> Self {
        let document = web_sys::window().and_then(|win| win.document());
        if let Some(doc) = &document {
            let _ = doc.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref());
        }
        Self { document, mousemove, mouseup }
    }
}

impl Drop for GlobalListeners {
    fn drop(&mut self) {
        if let Some(doc) = &self.document {
            let _ = doc.remove_event_listener_with_callback("mousemove", self.mousemove.as_ref().unchecked_ref());
            let _ = doc.remove_event_listener_with_callback("mouseup", self.mouseup.as_ref().unchecked_ref());
        }
    }
}

/// Bind document mousemove (starts a drag once moved past the threshold)
/// and mouseup (drop detection).
///
/// `len` reports the current list length; `on_move` receives
/// `(source, destination)` only for drops that actually move a row.
/// Keep the returned guard alive for as long as the list is mounted.
pub fn bind_global_listeners<L, F>(dnd: DndSignals, len: L, on_move: F) -> GlobalListeners
where
    L: Fn() -> usize + 'static,
    F: Fn(usize, usize) + 'static,
{
    let on_mousemove = MouseClosure::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

            if past_threshold(dx, dy) {
                dnd.dragging_write.set(pending);
            }
        }
    });

    let on_mouseup = MouseClosure::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);

        // Plain clicks fall through to the row's click handler
        if let (Some(source), Some(target)) = (dragging, drop_target) {
            if let Some(destination) = target.destination(source, len()) {
                on_move(source, destination);
            }
        }
    });

    GlobalListeners::attach(on_mousemove, on_mouseup)
}

fn past_threshold(dx: i32, dy: i32) -> bool {
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}
