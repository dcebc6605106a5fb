//! Ordered Collection Operations
//!
//! By-id operations on the authoritative script sequence. The popup store
//! is the only caller that mutates; list and editor only emit intents.

use crate::script::{Entity, ScriptId, ScriptItem};

/// Current index of an entity by id
pub fn position_of<E: Entity>(items: &[E], id: &E::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Find an entity by id
pub fn find<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|item| item.id() == id)
}

/// Replace the entity with the same id in place, or append it.
/// Returns true when the entity was appended.
pub fn upsert<E: Entity>(items: &mut Vec<E>, entity: E) -> bool {
    match position_of(items, entity.id()) {
        Some(index) => {
            items[index] = entity;
            false
        }
        None => {
            items.push(entity);
            true
        }
    }
}

/// Remove an entity by id
pub fn remove<E: Entity>(items: &mut Vec<E>, id: &E::Id) -> Option<E> {
    position_of(items, id).map(|index| items.remove(index))
}

/// Flip a script's auto-execute flag, returning the new value
pub fn toggle_auto_execute(scripts: &mut [ScriptItem], id: &ScriptId) -> Option<bool> {
    let script = scripts.iter_mut().find(|s| &s.id == id)?;
    script.auto_execute = !script.auto_execute;
    Some(script.auto_execute)
}

/// Counts reported by [`merge_imported`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub replaced: usize,
    pub appended: usize,
}

/// Merge imported scripts: an already-known id replaces the existing entry
/// where it stands, anything else is appended in import order.
pub fn merge_imported(scripts: &mut Vec<ScriptItem>, imported: Vec<ScriptItem>) -> MergeSummary {
    let mut summary = MergeSummary::default();
    for script in imported {
        if upsert(scripts, script) {
            summary.appended += 1;
        } else {
            summary.replaced += 1;
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_script(id: &str, title: &str) -> ScriptItem {
        ScriptItem::new(Some(id.into()), title, format!("console.log('{}')", title), false)
    }

    #[test]
    fn test_position_of_uses_id_not_title() {
        let scripts = vec![make_script("1", "same"), make_script("2", "same")];
        assert_eq!(position_of(&scripts, &"2".into()), Some(1));
        assert_eq!(position_of(&scripts, &"3".into()), None);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut scripts = vec![make_script("1", "a"), make_script("2", "b")];
        let appended = upsert(&mut scripts, make_script("1", "changed"));
        assert!(!appended);
        assert_eq!(scripts[0].title, "changed");
        assert_eq!(scripts.len(), 2);
    }

    #[test]
    fn test_upsert_appends_unknown() {
        let mut scripts = vec![make_script("1", "a")];
        assert!(upsert(&mut scripts, make_script("9", "new")));
        assert_eq!(scripts[1].id.as_str(), "9");
    }

    #[test]
    fn test_remove_by_id() {
        let mut scripts = vec![make_script("1", "a"), make_script("2", "b")];
        let removed = remove(&mut scripts, &"1".into()).unwrap();
        assert_eq!(removed.title, "a");
        assert_eq!(scripts.len(), 1);
        assert!(remove(&mut scripts, &"1".into()).is_none());
    }

    #[test]
    fn test_toggle_auto_execute() {
        let mut scripts = vec![make_script("1", "a")];
        assert_eq!(toggle_auto_execute(&mut scripts, &"1".into()), Some(true));
        assert_eq!(toggle_auto_execute(&mut scripts, &"1".into()), Some(false));
        assert_eq!(toggle_auto_execute(&mut scripts, &"x".into()), None);
    }

    #[test]
    fn test_merge_imported() {
        let mut scripts = vec![make_script("1", "a"), make_script("2", "b")];
        let summary = merge_imported(
            &mut scripts,
            vec![make_script("3", "c"), make_script("1", "a2")],
        );
        assert_eq!(summary, MergeSummary { replaced: 1, appended: 1 });
        let titles: Vec<&str> = scripts.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["a2", "b", "c"]);
    }
}
