//! Reorder Resolution
//!
//! Turns a finished drag (dragged id, target id) into an index-pair move
//! intent, and applies such intents. Indices are looked up at drop time so
//! a list that changed during the drag still resolves correctly.

use crate::collection::position_of;
use crate::script::Entity;

/// Requested reordering of the authoritative sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub start_index: usize,
    pub end_index: usize,
}

/// Resolve a drop into a move intent.
///
/// Returns `None` when either id is no longer present or both are the same.
pub fn resolve_move<E: Entity>(items: &[E], dragged: &E::Id, target: &E::Id) -> Option<MoveIntent> {
    if dragged == target {
        return None;
    }
    let start_index = position_of(items, dragged)?;
    let end_index = position_of(items, target)?;
    Some(MoveIntent { start_index, end_index })
}

/// Remove the element at `start` and insert it at `end` of the resulting
/// sequence. Out-of-range indices leave the vector untouched.
pub fn move_index<T>(items: &mut Vec<T>, start: usize, end: usize) -> bool {
    if start >= items.len() || end >= items.len() {
        return false;
    }
    if start != end {
        let moved = items.remove(start);
        items.insert(end, moved);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptItem;

    fn ids(items: &[ScriptItem]) -> Vec<&str> {
        items.iter().map(|s| s.id.as_str()).collect()
    }

    fn make_list(ids: &[&str]) -> Vec<ScriptItem> {
        ids.iter()
            .map(|id| ScriptItem::new(Some((*id).into()), *id, "", false))
            .collect()
    }

    #[test]
    fn test_move_is_remove_then_insert() {
        let mut v = vec!['A', 'B', 'C', 'D'];
        assert!(move_index(&mut v, 0, 2));
        assert_eq!(v, vec!['B', 'C', 'A', 'D']);
    }

    #[test]
    fn test_move_backwards() {
        let mut v = vec!['A', 'B', 'C', 'D'];
        move_index(&mut v, 3, 1);
        assert_eq!(v, vec!['A', 'D', 'B', 'C']);
    }

    #[test]
    fn test_move_out_of_range_is_noop() {
        let mut v = vec![1, 2, 3];
        assert!(!move_index(&mut v, 0, 3));
        assert!(!move_index(&mut v, 5, 0));
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_resolve_by_current_positions() {
        let items = make_list(&["a", "b", "c", "d"]);
        let intent = resolve_move(&items, &"a".into(), &"c".into()).unwrap();
        assert_eq!(intent, MoveIntent { start_index: 0, end_index: 2 });
    }

    #[test]
    fn test_resolve_after_concurrent_delete() {
        // "b" was deleted elsewhere while "d" was being dragged onto "c"
        let mut items = make_list(&["a", "b", "c", "d"]);
        items.remove(1);
        let intent = resolve_move(&items, &"d".into(), &"c".into()).unwrap();
        assert_eq!(intent, MoveIntent { start_index: 2, end_index: 1 });

        let mut items = items;
        move_index(&mut items, intent.start_index, intent.end_index);
        assert_eq!(ids(&items), vec!["a", "d", "c"]);
    }

    #[test]
    fn test_resolve_missing_or_same_target() {
        let items = make_list(&["a", "b"]);
        assert!(resolve_move(&items, &"a".into(), &"a".into()).is_none());
        assert!(resolve_move(&items, &"a".into(), &"gone".into()).is_none());
        assert!(resolve_move(&items, &"gone".into(), &"b".into()).is_none());
    }
}
