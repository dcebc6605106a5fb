//! Application Context
//!
//! Shared popup state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use script_core::ScriptId;

use crate::commands;
use crate::store::{store_scripts_snapshot, AppStore};

/// Which page of the popup is showing
#[derive(Clone, Debug, PartialEq)]
pub enum PopupView {
    List,
    /// Editing an existing script, or a new draft when `None`
    Edit(Option<ScriptId>),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Current page - read
    pub view: ReadSignal<PopupView>,
    /// Current page - write
    set_view: WriteSignal<PopupView>,
}

impl AppContext {
    pub fn new(store: AppStore, view: (ReadSignal<PopupView>, WriteSignal<PopupView>)) -> Self {
        Self {
            store,
            view: view.0,
            set_view: view.1,
        }
    }

    pub fn open_editor(&self, id: Option<ScriptId>) {
        log::debug!("[APP] open editor for {:?}", id);
        self.set_view.set(PopupView::Edit(id));
    }

    pub fn back_to_list(&self) {
        self.set_view.set(PopupView::List);
    }

    /// Write the current scripts to storage without waiting for it
    pub fn persist_scripts(&self) {
        let scripts = store_scripts_snapshot(&self.store);
        spawn_local(async move {
            if let Err(e) = commands::save_scripts(&scripts).await {
                log::warn!("[STORAGE] failed to save scripts: {}", e);
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
