//! Script Injector Popup Entry Point

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use script_injector_ui::app::PopupApp;
use script_injector_ui::commands::{self, PopupState};
use script_injector_ui::page;

fn main() {
    page::init();

    // leptos sets up its executor on mount, so the pre-mount load uses the
    // wasm-bindgen one
    spawn_local(async {
        let state = match commands::load_popup_state().await {
            Ok(state) => state,
            Err(e) => {
                log::warn!("[APP] starting with empty state: {}", e);
                PopupState::default()
            }
        };
        page::apply_theme(state.settings.dark);
        page::mount_root(move || view! { <PopupApp state=state /> });
    });
}
