//! UI Components
//!
//! Reusable Leptos components.

mod script_editor;
mod script_item;
mod script_list;

pub use script_editor::ScriptEditor;
pub use script_item::ScriptRow;
pub use script_list::ScriptList;
