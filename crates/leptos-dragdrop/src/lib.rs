//! Leptos DragDrop Utilities
//!
//! Sortable-list drag-and-drop for Leptos using mouse and touch events.
//! Mouse drags start after a movement threshold, touch drags after a short
//! hold. The gesture itself lives in [`gesture`]; this module wires it to
//! the DOM.

pub mod gesture;

use std::str::FromStr;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub use gesture::{DragGesture, DragOutcome, DragPhase, InputKind, Point};

/// Attribute carrying the item key, used to resolve touch hover targets
pub const DRAG_KEY_ATTR: &str = "data-drag-key";

/// How long the post-drag click suppression lasts
const CLICK_SUPPRESS_MS: u32 = 100;

/// Anything usable as a sortable item key
pub trait DragKey: Clone + PartialEq + Send + Sync + FromStr + ToString + 'static {}

impl<T> DragKey for T where T: Clone + PartialEq + Send + Sync + FromStr + ToString + 'static {}

/// DnD state signals
pub struct DndSignals<K: DragKey> {
    pub gesture: RwSignal<DragGesture<K>>,
    /// Set for a moment after a drag ends so the trailing click is ignored
    pub drag_just_ended: RwSignal<bool>,
}

impl<K: DragKey> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: DragKey> Copy for DndSignals<K> {}

impl<K: DragKey> DndSignals<K> {
    /// Key of the item being dragged (tracked)
    pub fn dragging_key(&self) -> Option<K> {
        self.gesture.with(|g| g.dragging_key().cloned())
    }

    /// Key of the hovered drop target (tracked)
    pub fn drop_target(&self) -> Option<K> {
        self.gesture.with(|g| g.drop_target().cloned())
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.with(|g| g.dragging_key().is_some())
    }
}

pub fn create_dnd_signals<K: DragKey>() -> DndSignals<K> {
    DndSignals {
        gesture: RwSignal::new(DragGesture::new()),
        drag_just_ended: RwSignal::new(false),
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Presses on form controls never start a drag
fn is_interactive(target: Option<web_sys::EventTarget>) -> bool {
    let Some(target) = target else { return false };
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
}

/// Mark a drag as just ended, cleared after a short delay
pub fn end_drag<K: DragKey>(dnd: &DndSignals<K>) {
    dnd.drag_just_ended.set(true);
    let clear = dnd.drag_just_ended;
    Timeout::new(CLICK_SUPPRESS_MS, move || clear.set(false)).forget();
}

/// Create mousedown handler for draggable items
/// Arms a pending drag at the press position
pub fn make_on_mousedown<K: DragKey>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_interactive(ev.target()) {
            return;
        }
        let at = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        let key = key.clone();
        dnd.gesture.update(|g| {
            g.press(key, InputKind::Pointer, at, now_ms());
        });
    }
}

/// Create touchstart handler for draggable items
/// Arms a pending drag that activates once the finger is held still
pub fn make_on_touchstart<K: DragKey>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::TouchEvent) + Clone + 'static {
    move |ev: web_sys::TouchEvent| {
        if is_interactive(ev.target()) {
            return;
        }
        let Some(touch) = ev.touches().get(0) else { return };
        let at = Point::new(touch.client_x() as f64, touch.client_y() as f64);
        let key = key.clone();
        let armed = dnd
            .gesture
            .try_update(|g| g.press(key, InputKind::Touch, at, now_ms()))
            .unwrap_or(false);
        if !armed {
            return;
        }

        Timeout::new(gesture::TOUCH_DELAY_MS as u32, move || {
            let activated = dnd.gesture.try_update(|g| g.delay_elapsed(now_ms())).unwrap_or(false);
            if activated {
                log::debug!("[DND] touch drag activated");
            }
        })
        .forget();
    }
}

/// Create mouseenter handler for items (become drop target)
pub fn make_on_item_mouseenter<K: DragKey>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.gesture.with_untracked(|g| g.dragging_key().is_some()) {
            let key = key.clone();
            dnd.gesture.update(|g| g.hover(Some(key)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K: DragKey>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.gesture.with_untracked(|g| g.drop_target().is_some()) {
            dnd.gesture.update(|g| g.hover(None));
        }
    }
}

fn is_armed<K: DragKey>(dnd: &DndSignals<K>, input: InputKind) -> bool {
    dnd.gesture
        .with_untracked(|g| matches!(g.phase(), DragPhase::Armed { input: i, .. } if *i == input))
}

fn key_under_point<K: DragKey>(doc: &web_sys::Document, at: Point) -> Option<K> {
    let el = doc.element_from_point(at.x as f32, at.y as f32)?;
    let item = el.closest(&format!("[{}]", DRAG_KEY_ATTR)).ok()??;
    K::from_str(&item.get_attribute(DRAG_KEY_ATTR)?).ok()
}

fn finish<K: DragKey, F: Fn(K, K)>(dnd: &DndSignals<K>, input: InputKind, on_drop: &F) {
    if dnd.gesture.with_untracked(|g| g.input() != Some(input)) {
        return;
    }
    match dnd.gesture.try_update(|g| g.release()).flatten() {
        Some(DragOutcome::Committed { dragged, target }) => {
            log::info!("[DND] drop {} onto {}", dragged.to_string(), target.to_string());
            end_drag(dnd);
            on_drop(dragged, target);
        }
        Some(DragOutcome::Cancelled { dragged }) => {
            log::debug!("[DND] released {} outside any target", dragged.to_string());
            end_drag(dnd);
        }
        // a tap: the click fires naturally on the element
        None => {}
    }
}

fn cancel<K: DragKey>(dnd: &DndSignals<K>) {
    if dnd.gesture.with_untracked(|g| g.is_idle()) {
        return;
    }
    if let Some(DragOutcome::Cancelled { dragged }) = dnd.gesture.try_update(|g| g.cancel()).flatten() {
        log::debug!("[DND] cancelled drag of {}", dragged.to_string());
        end_drag(dnd);
    }
}

/// Bind document-level handlers that drive the gesture and report drops.
///
/// `on_drop(dragged, target)` runs only for a committed drag over another
/// item. Listeners live for the lifetime of the page.
pub fn bind_global_handlers<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: DragKey,
    F: Fn(K, K) + Clone + 'static,
{
    let Some(doc) = document() else { return };

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if is_armed(&dnd, InputKind::Pointer) {
            let at = Point::new(ev.client_x() as f64, ev.client_y() as f64);
            dnd.gesture.update(|g| {
                g.moved(at, now_ms());
            });
        }
    });
    let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    on_mousemove.forget();

    let drop_on_mouseup = on_drop.clone();
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        finish(&dnd, InputKind::Pointer, &drop_on_mouseup);
    });
    let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    on_mouseup.forget();

    let touch_doc = doc.clone();
    let on_touchmove = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        let Some(touch) = ev.touches().get(0) else { return };
        let at = Point::new(touch.client_x() as f64, touch.client_y() as f64);

        if is_armed(&dnd, InputKind::Touch) {
            dnd.gesture.update(|g| {
                g.moved(at, now_ms());
            });
            return;
        }
        if dnd.gesture.with_untracked(|g| g.dragging_key().is_none() || g.input() != Some(InputKind::Touch)) {
            return;
        }

        // dragging: keep the page from scrolling under the finger
        ev.prevent_default();
        let hovered = key_under_point::<K>(&touch_doc, at);
        if dnd.gesture.with_untracked(|g| g.drop_target() != hovered.as_ref()) {
            dnd.gesture.update(|g| g.hover(hovered));
        }
    });
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(false);
    let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        on_touchmove.as_ref().unchecked_ref(),
        &opts,
    );
    on_touchmove.forget();

    let on_touchend = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        finish(&dnd, InputKind::Touch, &on_drop);
    });
    let _ = doc.add_event_listener_with_callback("touchend", on_touchend.as_ref().unchecked_ref());
    on_touchend.forget();

    let on_touchcancel = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        cancel(&dnd);
    });
    let _ = doc.add_event_listener_with_callback("touchcancel", on_touchcancel.as_ref().unchecked_ref());
    on_touchcancel.forget();

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            cancel(&dnd);
        }
    });
    let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}
