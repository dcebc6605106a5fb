//! Script List Component
//!
//! Renders the ordered scripts with drag-and-drop reordering, an add box,
//! and a file drop surface for imports. The list never mutates the store;
//! it only reports intents.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_dragdrop::DndSignals;
use script_core::{ScriptId, ScriptItem};

use crate::components::ScriptRow;
use crate::file_import::{first_file, import_file};

/// Script list with DnD support
#[component]
pub fn ScriptList(
    #[prop(into)] scripts: Signal<Vec<ScriptItem>>,
    dnd: DndSignals<ScriptId>,
    #[prop(into)] on_edit: Callback<ScriptId>,
    #[prop(into)] on_emit_code: Callback<ScriptId>,
    #[prop(into)] on_toggle_auto_execute: Callback<ScriptId>,
    #[prop(into)] on_import_scripts: Callback<Vec<ScriptItem>>,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    // Nested dragenter/dragleave pairs while a file hovers the list
    let (file_hover_depth, set_file_hover_depth) = signal(0i32);
    let file_drag_active = move || file_hover_depth.get() > 0;

    let on_dragenter = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_file_hover_depth.update(|d| *d += 1);
    };
    let on_dragover = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
    };
    let on_dragleave = move |_ev: web_sys::DragEvent| {
        set_file_hover_depth.update(|d| *d = (*d - 1).max(0));
    };
    let on_file_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_file_hover_depth.set(0);

        let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) else {
            return;
        };
        spawn_local(async move {
            match import_file(file).await {
                Ok(scripts) => on_import_scripts.run(scripts),
                Err(e) => log::debug!("[IMPORT] dropped file ignored: {}", e),
            }
        });
    };

    let list_class = move || {
        let mut c = String::from("stage list");
        if dnd.is_dragging() { c.push_str(" sorting"); }
        c
    };

    view! {
        <div
            class=list_class
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_file_drop
        >
            <div class="script-items">
                <For
                    each=move || scripts.get()
                    key=|script| {
                        // Every displayed field, so edits re-render the row
                        (script.id.clone(), script.title.clone(), script.code.clone(), script.auto_execute)
                    }
                    children=move |script| {
                        view! {
                            <ScriptRow
                                script=script
                                dnd=dnd
                                on_edit=on_edit
                                on_emit_code=on_emit_code
                                on_toggle_auto_execute=on_toggle_auto_execute
                            />
                        }
                    }
                />
                <div class="script-item add-item" title="add script" on:click=move |_| on_add.run(())>
                    "+"
                </div>
            </div>

            <Show when=file_drag_active>
                <div class="drop-mask">
                    <div class="drop-mask-line">"Drop a .json file to import"</div>
                </div>
            </Show>
        </div>
    }
}
