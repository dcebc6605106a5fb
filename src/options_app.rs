//! Options Page App
//!
//! Theme toggle plus import/export of the whole script collection.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use script_core::Settings;

use crate::commands;
use crate::file_import::{first_file, import_file};
use crate::page::apply_theme;

/// Import a file, replacing every stored script
async fn replace_scripts_from(file: web_sys::File) -> Result<usize, String> {
    let scripts = import_file(file).await.map_err(|e| e.to_string())?;
    commands::save_scripts(&scripts).await.map_err(|e| e.to_string())?;
    Ok(scripts.len())
}

#[component]
pub fn OptionsApp(settings: Settings) -> impl IntoView {
    let settings = RwSignal::new(settings);
    let (status, set_status) = signal(None::<String>);

    let run_import = move |file: web_sys::File| {
        spawn_local(async move {
            match replace_scripts_from(file).await {
                Ok(count) => {
                    log::info!("[IMPORT] replaced stored scripts with {}", count);
                    set_status.set(Some(format!("Imported {} scripts", count)));
                }
                Err(e) => {
                    log::warn!("[IMPORT] import failed: {}", e);
                    set_status.set(Some("Import failed: choose a .json export".to_string()));
                }
            }
        });
    };

    let toggle_dark = move |_| {
        settings.update(|s| s.dark = !s.dark);
        let updated = settings.get_untracked();
        apply_theme(updated.dark);
        spawn_local(async move {
            if let Err(e) = commands::save_settings(&updated).await {
                log::warn!("[SETTINGS] failed to save: {}", e);
            }
        });
    };

    let on_file_chosen = move |ev: web_sys::Event| {
        let files = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files());
        if let Some(file) = first_file(files) {
            run_import(file);
        }
    };

    let on_file_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) {
            run_import(file);
        }
    };

    let on_export = move |_| {
        spawn_local(async move {
            match commands::request_export().await {
                Ok(()) => set_status.set(Some("Export started".to_string())),
                Err(e) => log::warn!("[EXPORT] {}", e),
            }
        });
    };

    view! {
        <div class="options">
            <h1>"Script Injector"</h1>

            <section class="option-row">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || settings.with(|s| s.dark)
                        on:change=toggle_dark
                    />
                    "Dark theme"
                </label>
            </section>

            <section
                class="option-row import-area"
                on:dragover=|ev: web_sys::DragEvent| ev.prevent_default()
                on:drop=on_file_drop
            >
                <span>"Import scripts (replaces the current list)"</span>
                <input type="file" accept=".json,application/json" on:change=on_file_chosen />
            </section>

            <section class="option-row">
                <button class="btn" on:click=on_export>"Export scripts"</button>
            </section>

            <Show when=move || status.get().is_some()>
                <p class="status">{move || status.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
