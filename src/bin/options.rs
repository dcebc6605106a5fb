//! Script Injector Options Entry Point

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use script_core::Settings;
use script_injector_ui::commands;
use script_injector_ui::options_app::OptionsApp;
use script_injector_ui::page;

fn main() {
    page::init();

    spawn_local(async {
        let settings = commands::load_settings().await.unwrap_or_else(|e| {
            log::warn!("[SETTINGS] using defaults: {}", e);
            Settings::default()
        });
        page::apply_theme(settings.dark);
        page::mount_root(move || view! { <OptionsApp settings=settings /> });
    });
}
