//! Script Item Component
//!
//! One row of the script list: run on click, edit, auto-execute toggle.

use leptos::prelude::*;

use leptos_dragdrop::{make_on_item_mouseenter, make_on_mouseleave, make_on_mousedown, make_on_touchstart, DndSignals};
use script_core::{ScriptId, ScriptItem};

/// A single draggable script row
#[component]
pub fn ScriptRow(
    script: ScriptItem,
    dnd: DndSignals<ScriptId>,
    #[prop(into)] on_edit: Callback<ScriptId>,
    #[prop(into)] on_emit_code: Callback<ScriptId>,
    #[prop(into)] on_toggle_auto_execute: Callback<ScriptId>,
) -> impl IntoView {
    let id = script.id.clone();
    let auto_execute = script.auto_execute;
    let title = if script.title.is_empty() { "(untitled)".to_string() } else { script.title.clone() };

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_touchstart = make_on_touchstart(dnd, id.clone());
    let on_mouseenter = make_on_item_mouseenter(dnd, id.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    // Visual state
    let row_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("script-item");
            if dnd.dragging_key().as_ref() == Some(&id) { c.push_str(" dragging"); }
            if dnd.drop_target().as_ref() == Some(&id) { c.push_str(" drop-target"); }
            if auto_execute { c.push_str(" auto"); }
            c
        }
    };

    // A drag released on this row must not also run it
    let run = {
        let id = id.clone();
        move |_| {
            if dnd.drag_just_ended.get_untracked() {
                return;
            }
            on_emit_code.run(id.clone());
        }
    };
    let edit = {
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            on_edit.run(id.clone());
        }
    };
    let toggle = {
        let id = id.clone();
        move |ev: web_sys::Event| {
            ev.stop_propagation();
            on_toggle_auto_execute.run(id.clone());
        }
    };

    view! {
        <div
            class=row_class
            data-drag-key=id.to_string()
            title=script.code.clone()
            on:mousedown=on_mousedown
            on:touchstart=on_touchstart
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=run
        >
            <span class="script-title">{title}</span>
            <label class="auto-toggle" title="run automatically" on:click=|ev| ev.stop_propagation()>
                <input type="checkbox" prop:checked=auto_execute on:change=toggle />
                "auto"
            </label>
            <button class="edit-btn" title="edit" on:click=edit>"✎"</button>
        </div>
    }
}
