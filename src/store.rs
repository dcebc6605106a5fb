//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The popup root
//! owns the store and is its only writer; every mutation goes through the
//! helpers below and is persisted afterwards.

use leptos::prelude::*;
use reactive_stores::Store;

use script_core::collection::{self, MergeSummary};
use script_core::{move_index, resolve_move, MoveIntent, ScriptId, ScriptItem, Settings};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ordered scripts, as stored
    pub scripts: Vec<ScriptItem>,
    /// Global options
    pub settings: Settings,
}

impl AppState {
    pub fn new(scripts: Vec<ScriptItem>, settings: Settings) -> Self {
        Self { scripts, settings }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current scripts, without subscribing
pub fn store_scripts_snapshot(store: &AppStore) -> Vec<ScriptItem> {
    store.scripts().get_untracked()
}

pub fn store_find_script(store: &AppStore, id: &ScriptId) -> Option<ScriptItem> {
    store.scripts().with_untracked(|scripts| collection::find(scripts, id).cloned())
}

/// Replace a script by id, or append it. Returns true when appended.
pub fn store_upsert_script(store: &AppStore, script: ScriptItem) -> bool {
    collection::upsert(&mut *store.scripts().write(), script)
}

/// Remove a script by id
pub fn store_remove_script(store: &AppStore, id: &ScriptId) -> bool {
    collection::remove(&mut *store.scripts().write(), id).is_some()
}

/// Flip auto-execute for a script, returning the new value
pub fn store_toggle_auto_execute(store: &AppStore, id: &ScriptId) -> Option<bool> {
    collection::toggle_auto_execute(&mut store.scripts().write(), id)
}

/// Resolve a drop to indices in the current order
pub fn store_resolve_move(store: &AppStore, dragged: &ScriptId, target: &ScriptId) -> Option<MoveIntent> {
    store.scripts().with_untracked(|scripts| resolve_move(scripts, dragged, target))
}

/// Apply a move intent (remove at start, insert at end)
pub fn store_apply_move(store: &AppStore, intent: MoveIntent) -> bool {
    move_index(&mut *store.scripts().write(), intent.start_index, intent.end_index)
}

/// Merge imported scripts by id
pub fn store_merge_imported(store: &AppStore, imported: Vec<ScriptItem>) -> MergeSummary {
    collection::merge_imported(&mut *store.scripts().write(), imported)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ScriptItem> {
        ["A", "B", "C", "D"]
            .iter()
            .map(|t| ScriptItem::new(Some(ScriptId::from(t.to_lowercase())), *t, format!("{}()", t), false))
            .collect()
    }

    fn titles(store: &AppStore) -> Vec<String> {
        store_scripts_snapshot(store).into_iter().map(|s| s.title).collect()
    }

    #[test]
    fn test_move_by_id() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::new(sample(), Settings::default()));

        let intent = store_resolve_move(&store, &ScriptId::from("a"), &ScriptId::from("c"));
        assert_eq!(intent, Some(MoveIntent { start_index: 0, end_index: 2 }));
        assert!(store_apply_move(&store, intent.unwrap()));
        assert_eq!(titles(&store), vec!["B", "C", "A", "D"]);

        assert_eq!(store_resolve_move(&store, &ScriptId::from("a"), &ScriptId::from("gone")), None);
        assert!(!store_apply_move(&store, MoveIntent { start_index: 9, end_index: 0 }));
        assert_eq!(titles(&store), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_upsert_toggle_remove() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::new(sample(), Settings::default()));

        let id = ScriptId::from("b");
        assert_eq!(store_toggle_auto_execute(&store, &id), Some(true));
        assert_eq!(store_find_script(&store, &id).map(|s| s.auto_execute), Some(true));

        assert!(store_upsert_script(&store, ScriptItem::new(None, "E", "e()", false)));
        assert_eq!(titles(&store).len(), 5);

        assert!(store_remove_script(&store, &id));
        assert!(!store_remove_script(&store, &id));
        assert_eq!(titles(&store), vec!["A", "C", "D", "E"]);
    }
}
