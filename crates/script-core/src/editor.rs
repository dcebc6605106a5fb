//! Edit Session
//!
//! Provisional title/code for a single script. Nothing reaches the store
//! until `save` hands back a complete replacement.

use crate::format::{format_js, FormatOptions};
use crate::script::{ScriptId, ScriptItem};

/// Maximum title length accepted by the title input
pub const TITLE_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    /// Item being edited, or a fresh draft for "add"
    base: ScriptItem,
    is_new: bool,
    title: String,
    code: String,
    expanded: bool,
}

impl EditSession {
    /// Open a session on an existing script, or on a new draft
    pub fn open(script: Option<&ScriptItem>) -> Self {
        let (base, is_new) = match script {
            Some(script) => (script.clone(), false),
            None => (ScriptItem::draft(), true),
        };
        Self {
            title: base.title.clone(),
            code: base.code.clone(),
            base,
            is_new,
            expanded: false,
        }
    }

    pub fn id(&self) -> &ScriptId {
        &self.base.id
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.chars().take(TITLE_MAX_CHARS).collect();
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Complete replacement script with trimmed title and code.
    /// Id and auto-execute flag come from the edited item.
    pub fn save(&self) -> ScriptItem {
        ScriptItem {
            id: self.base.id.clone(),
            title: self.title.trim().to_string(),
            code: self.code.trim().to_string(),
            auto_execute: self.base.auto_execute,
        }
    }

    /// Clear provisional state and return the id to delete
    pub fn delete(&mut self) -> ScriptId {
        self.title.clear();
        self.code.clear();
        self.base.id.clone()
    }

    /// Discard provisional state
    pub fn cancel(self) {}

    /// Reformat the code buffer in place
    pub fn format_code(&mut self) {
        self.code = format_js(&self.code, &FormatOptions::default());
    }

    /// Toggle the expanded display mode, returning the new mode
    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}
