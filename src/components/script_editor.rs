//! Script Editor Component
//!
//! Title input and code buffer for one script, with a highlighted preview
//! and an expanded (fullscreen) mode.

use leptos::prelude::*;

use script_core::{EditSession, ScriptId, ScriptItem, TITLE_MAX_CHARS};

use crate::highlight::{highlight_js, line_numbers};

/// Largest page size an extension popup may take
const EXPANDED_WIDTH_PX: u32 = 800;
const EXPANDED_HEIGHT_PX: u32 = 600;

/// Size the page for the expanded view and enter fullscreen, or undo both
fn apply_expanded(expanded: bool) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else { return };

    if expanded {
        if let Some(body) = doc.body() {
            let style = body.style();
            let _ = style.set_property("width", &format!("{}px", EXPANDED_WIDTH_PX));
            let _ = style.set_property("height", &format!("{}px", EXPANDED_HEIGHT_PX));
        }
        if doc.fullscreen_element().is_none() {
            if let Some(root) = doc.document_element() {
                if let Err(e) = root.request_fullscreen() {
                    log::debug!("[EDITOR] fullscreen refused: {:?}", e);
                }
            }
        }
    } else {
        if doc.fullscreen_element().is_some() {
            doc.exit_fullscreen();
        }
        if let Some(body) = doc.body() {
            let _ = body.remove_attribute("style");
        }
    }
}

/// Editor for a single script (or a new draft when `script` is None)
#[component]
pub fn ScriptEditor(
    script: Option<ScriptItem>,
    #[prop(into)] dark: Signal<bool>,
    #[prop(into)] on_save: Callback<ScriptItem>,
    #[prop(into)] on_del: Callback<ScriptId>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let session = RwSignal::new(EditSession::open(script.as_ref()));

    let title = move || session.with(|s| s.title().to_string());
    let code = move || session.with(|s| s.code().to_string());
    let expanded = move || session.with(|s| s.is_expanded());

    Effect::new(move |_| apply_expanded(expanded()));
    on_cleanup(|| apply_expanded(false));

    let handle_save = move |_| {
        let saved = session.with_untracked(|s| s.save());
        log::debug!("[EDITOR] save {}", saved.id);
        on_save.run(saved);
    };
    let handle_del = move |_| {
        if let Some(id) = session.try_update(|s| s.delete()) {
            on_del.run(id);
        }
    };
    let handle_format = move |_| session.update(|s| s.format_code());
    let handle_toggle_expanded = move |_| {
        session.update(|s| {
            s.toggle_expanded();
        });
    };

    let preview_html = move || session.with(|s| highlight_js(s.code(), dark.get()));

    view! {
        <div class=move || if expanded() { "stage editor expanded" } else { "stage editor" }>
            <div class="editor-header">
                <input
                    type="text"
                    class="input-title"
                    maxlength=TITLE_MAX_CHARS
                    placeholder="Please enter a script title"
                    autofocus=true
                    prop:value=title
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.set_title(&value));
                    }
                />
                <div class="button-area">
                    <button class="icon-btn delete-btn" title="delete" on:click=handle_del>"🗑"</button>
                    <button class="icon-btn" title="format" on:click=handle_format>"{ }"</button>
                    <button
                        class="icon-btn"
                        title=move || if expanded() { "exit fullscreen" } else { "fullscreen" }
                        on:click=handle_toggle_expanded
                    >
                        {move || if expanded() { "⤡" } else { "⤢" }}
                    </button>
                    <button class="btn red" on:click=handle_save>"Save"</button>
                    <button class="btn gray" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                </div>
            </div>

            <div class="code-area">
                <Show when=expanded>
                    <pre class="line-numbers">{move || line_numbers(&code())}</pre>
                </Show>
                <textarea
                    class="code-textarea"
                    spellcheck="false"
                    prop:value=code
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| s.set_code(value));
                    }
                ></textarea>
            </div>

            <div class="code-preview" inner_html=preview_html></div>
        </div>
    }
}
