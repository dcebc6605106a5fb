//! Script Entity
//!
//! A user-authored snippet with a stable identity. Every list operation
//! (edit, delete, reorder) targets scripts by id, never by position or title.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Core trait for entities that live in an ordered collection
pub trait Entity {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Opaque script identifier
///
/// Fresh ids are UUID v4 strings, but imported ids are kept verbatim,
/// so no format is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptId(String);

impl ScriptId {
    /// Generate a new unique id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ScriptId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ScriptId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for ScriptId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// A stored user snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptItem {
    /// Unique identifier, assigned once
    pub id: ScriptId,
    /// Display title
    pub title: String,
    /// Snippet source
    pub code: String,
    /// Run automatically when a page loads
    #[serde(default)]
    pub auto_execute: bool,
}

impl ScriptItem {
    /// Build a script, generating an id only when none is supplied
    pub fn new(id: Option<ScriptId>, title: impl Into<String>, code: impl Into<String>, auto_execute: bool) -> Self {
        Self {
            id: id.unwrap_or_else(ScriptId::generate),
            title: title.into(),
            code: code.into(),
            auto_execute,
        }
    }

    /// Empty script for the "add" action; only persisted once saved
    pub fn draft() -> Self {
        Self::new(None, String::new(), String::new(), false)
    }
}

impl Entity for ScriptItem {
    type Id = ScriptId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_given_id() {
        let id = ScriptId::from("abc");
        let script = ScriptItem::new(Some(id.clone()), "Title", "alert(1)", true);
        assert_eq!(script.id(), &id);
        assert!(script.auto_execute);
    }

    #[test]
    fn test_new_generates_distinct_ids() {
        let a = ScriptItem::new(None, "A", "", false);
        let b = ScriptItem::new(None, "A", "", false);
        assert_ne!(a.id, b.id);
        assert!(!a.id.as_str().is_empty());
    }

    #[test]
    fn test_draft_is_empty() {
        let draft = ScriptItem::draft();
        assert!(draft.title.is_empty());
        assert!(draft.code.is_empty());
        assert!(!draft.auto_execute);
    }

    #[test]
    fn test_serialized_shape() {
        let script = ScriptItem::new(Some("1".into()), "Hello", "x=1;", false);
        let json = serde_json::to_value(&script).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "1", "title": "Hello", "code": "x=1;", "autoExecute": false })
        );
    }

    #[test]
    fn test_auto_execute_defaults_when_absent() {
        let script: ScriptItem =
            serde_json::from_str(r#"{"id":"7","title":"t","code":"c"}"#).unwrap();
        assert!(!script.auto_execute);
    }
}
