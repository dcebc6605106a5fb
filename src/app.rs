//! Script Injector Popup App
//!
//! Root of the popup: owns the store, switches between the list and the
//! editor, and turns their intents into store updates.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use leptos_dragdrop::{bind_global_handlers, create_dnd_signals};
use script_core::{MoveIntent, ScriptId, ScriptItem};

use crate::commands::{self, PopupState};
use crate::components::{ScriptEditor, ScriptList};
use crate::context::{AppContext, PopupView};
use crate::store::{
    store_apply_move, store_find_script, store_merge_imported, store_remove_script, store_resolve_move,
    store_toggle_auto_execute, store_upsert_script, AppState, AppStateStoreFields, AppStore,
};

#[component]
pub fn PopupApp(state: PopupState) -> impl IntoView {
    let store: AppStore = Store::new(AppState::new(state.scripts, state.settings));
    let view_signal = signal(PopupView::List);
    let ctx = AppContext::new(store, view_signal);
    provide_context(store);
    provide_context(ctx);

    let scripts = Signal::derive(move || store.scripts().get());
    let dark = Signal::derive(move || store.settings().get().dark);

    // DnD lives as long as the popup, so document listeners are bound once
    let dnd = create_dnd_signals::<ScriptId>();
    let on_move_sort = move |intent: MoveIntent| {
        if store_apply_move(&store, intent) {
            log::info!("[DND] moved {} -> {}", intent.start_index, intent.end_index);
            ctx.persist_scripts();
        }
    };
    bind_global_handlers(dnd, move |dragged: ScriptId, target: ScriptId| {
        match store_resolve_move(&store, &dragged, &target) {
            Some(intent) => on_move_sort(intent),
            None => log::debug!("[DND] drop target {} no longer present", target),
        }
    });

    // List intents
    let on_edit = move |id: ScriptId| ctx.open_editor(Some(id));
    let on_add = move |_: ()| ctx.open_editor(None);
    let on_toggle_auto_execute = move |id: ScriptId| {
        if let Some(on) = store_toggle_auto_execute(&store, &id) {
            log::debug!("[APP] auto-execute {} for {}", on, id);
            ctx.persist_scripts();
        }
    };
    let on_emit_code = move |id: ScriptId| {
        let Some(script) = store_find_script(&store, &id) else { return };
        spawn_local(async move {
            if let Err(e) = commands::emit_code(&script.code).await {
                log::warn!("[APP] could not run {}: {}", script.id, e);
            }
        });
    };
    let on_import_scripts = move |imported: Vec<ScriptItem>| {
        let summary = store_merge_imported(&store, imported);
        log::info!("[IMPORT] {} replaced, {} appended", summary.replaced, summary.appended);
        ctx.persist_scripts();
    };

    // Editor intents
    let on_save = move |script: ScriptItem| {
        store_upsert_script(&store, script);
        ctx.persist_scripts();
        ctx.back_to_list();
    };
    let on_del = move |id: ScriptId| {
        // an unsaved draft has nothing to remove
        if store_remove_script(&store, &id) {
            ctx.persist_scripts();
        }
        ctx.back_to_list();
    };
    let on_cancel = move |_: ()| ctx.back_to_list();

    view! {
        <div class="popup">
            {move || match ctx.view.get() {
                PopupView::List => view! {
                    <ScriptList
                        scripts=scripts
                        dnd=dnd
                        on_edit=on_edit
                        on_emit_code=on_emit_code
                        on_toggle_auto_execute=on_toggle_auto_execute
                        on_import_scripts=on_import_scripts
                        on_add=on_add
                    />
                }.into_any(),
                PopupView::Edit(id) => {
                    let script = id.and_then(|id| store_find_script(&store, &id));
                    view! {
                        <ScriptEditor
                            script=script
                            dark=dark
                            on_save=on_save
                            on_del=on_del
                            on_cancel=on_cancel
                        />
                    }.into_any()
                }
            }}
        </div>
    }
}
