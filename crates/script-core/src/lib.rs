//! Script Core
//!
//! Browser-independent rules behind the script injector UI:
//! - script: the stored snippet entity and its identity
//! - import: normalization of untrusted script arrays and dropped files
//! - collection / reorder: by-id operations on the ordered script list
//! - editor: single-item edit session
//! - format: JavaScript re-indentation used by the editor
//! - settings, message: storage and messaging payloads
//!
//! Nothing in here touches the DOM or the extension APIs, so everything is
//! testable with a plain `cargo test`.

pub mod collection;
pub mod editor;
pub mod error;
pub mod format;
pub mod import;
pub mod message;
pub mod reorder;
pub mod script;
pub mod settings;

mod tests;

pub use editor::{EditSession, TITLE_MAX_CHARS};
pub use error::{ImportError, ImportResult};
pub use format::{format_js, FormatOptions};
pub use import::{normalize, parse_import_file};
pub use message::UiMessage;
pub use reorder::{move_index, resolve_move, MoveIntent};
pub use script::{Entity, ScriptId, ScriptItem};
pub use settings::Settings;
