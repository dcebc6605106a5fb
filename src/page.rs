//! Page Bootstrap
//!
//! Start-up steps shared by the popup and options pages.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Panic hook and console logger
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
}

/// Toggle the `dark` class on the document element
pub fn apply_theme(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = if dark { classes.add_1("dark") } else { classes.remove_1("dark") };
}

/// Mount `view` into `#root`. A page without the container renders nothing.
pub fn mount_root<F, N>(view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("root"))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match container {
        Some(el) => leptos::mount::mount_to(el, view).forget(),
        None => log::warn!("[APP] no #root element, nothing to render"),
    }
}
