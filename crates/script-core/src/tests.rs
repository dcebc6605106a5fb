//! Scenario Tests
//!
//! End-to-end flows across normalizer, collection, reorder and editor,
//! mirroring what the popup does with user input.

#[cfg(test)]
mod tests {
    use crate::collection::{self, MergeSummary};
    use crate::editor::EditSession;
    use crate::import::normalize;
    use crate::reorder::{move_index, resolve_move};
    use crate::script::{ScriptId, ScriptItem};
    use serde_json::json;

    fn titles(scripts: &[ScriptItem]) -> Vec<&str> {
        scripts.iter().map(|s| s.title.as_str()).collect()
    }

    fn sample_import() -> serde_json::Value {
        json!([
            { "id": "a", "title": "A", "code": "a()" },
            { "title": "B", "code": "b()", "autoExecute": 1 },
            { "title": "broken" },
            { "id": "c", "title": "C", "code": "c()", "autoExecute": false },
            { "title": "D", "code": "d()" },
        ])
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(&sample_import());
        let again = normalize(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, again);
    }

    #[test]
    fn test_reimporting_export_keeps_identity() {
        let stored = normalize(&sample_import());
        let exported = serde_json::to_string(&stored).unwrap();

        let mut scripts = stored.clone();
        let reimported = normalize(&serde_json::from_str(&exported).unwrap());
        let summary = collection::merge_imported(&mut scripts, reimported);

        assert_eq!(summary, MergeSummary { replaced: 4, appended: 0 });
        assert_eq!(scripts, stored);
    }

    #[test]
    fn test_drag_reorder_flow() {
        let mut scripts = normalize(&sample_import());
        assert_eq!(titles(&scripts), vec!["A", "B", "C", "D"]);

        let dragged = scripts[0].id.clone();
        let target = scripts[2].id.clone();
        let intent = resolve_move(&scripts, &dragged, &target).unwrap();
        assert!(move_index(&mut scripts, intent.start_index, intent.end_index));

        assert_eq!(titles(&scripts), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_drop_without_target_leaves_order() {
        let scripts = normalize(&sample_import());
        let before = scripts.clone();
        let dragged = scripts[1].id.clone();
        let missing = ScriptId::from("deleted-elsewhere");
        assert!(resolve_move(&scripts, &dragged, &missing).is_none());
        assert_eq!(scripts, before);
    }

    #[test]
    fn test_add_then_save_appends_draft() {
        let mut scripts = normalize(&sample_import());
        let mut session = EditSession::open(None);
        session.set_title("  New one ");
        session.set_code("\n run()\n");

        let saved = session.save();
        assert!(collection::upsert(&mut scripts, saved.clone()));
        assert_eq!(scripts.last(), Some(&saved));
        assert_eq!(saved.title, "New one");
        assert_eq!(saved.code, "run()");
    }

    #[test]
    fn test_edit_then_save_replaces_in_place() {
        let mut scripts = normalize(&sample_import());
        let target = scripts[1].clone();
        assert!(target.auto_execute);

        let mut session = EditSession::open(Some(&target));
        session.set_title("B2");
        assert!(!collection::upsert(&mut scripts, session.save()));

        assert_eq!(titles(&scripts), vec!["A", "B2", "C", "D"]);
        assert_eq!(scripts[1].id, target.id);
        assert!(scripts[1].auto_execute);
    }

    #[test]
    fn test_delete_from_editor() {
        let mut scripts = normalize(&sample_import());
        let target = scripts[2].clone();
        let mut session = EditSession::open(Some(&target));

        let id = session.delete();
        assert!(collection::remove(&mut scripts, &id).is_some());
        assert_eq!(titles(&scripts), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_deleting_unsaved_draft_is_noop() {
        let mut scripts = normalize(&sample_import());
        let mut session = EditSession::open(None);
        let id = session.delete();
        assert!(collection::remove(&mut scripts, &id).is_none());
        assert_eq!(scripts.len(), 4);
    }
}
