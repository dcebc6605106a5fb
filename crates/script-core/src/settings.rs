//! Global Settings
//!
//! A single record stored under the `setting` key. Every option has a
//! default, so any partial record read from storage can be completed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Build-time switch for the default theme
const DARK_THEME_ENV: Option<&str> = option_env!("SCRIPT_INJECTOR_DARK_THEME");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_dark")]
    pub dark: bool,
}

fn default_dark() -> bool {
    DARK_THEME_ENV == Some("true")
}

impl Default for Settings {
    fn default() -> Self {
        Self { dark: default_dark() }
    }
}

impl Settings {
    /// Overlay a stored (possibly partial) record on top of `self`.
    ///
    /// A stored field is taken only when it names a known option and has the
    /// same JSON type as the current value; anything else is ignored.
    pub fn merged_with(&self, stored: Option<&Value>) -> Self {
        let Some(Value::Object(stored)) = stored else {
            return self.clone();
        };
        let Ok(Value::Object(mut current)) = serde_json::to_value(self) else {
            return self.clone();
        };

        for (key, value) in stored {
            match current.get_mut(key) {
                Some(slot) if same_kind(slot, value) => *slot = value.clone(),
                Some(_) => log::debug!("[SETTINGS] ignoring mistyped option {}", key),
                None => log::debug!("[SETTINGS] ignoring unknown option {}", key),
            }
        }

        serde_json::from_value(Value::Object(current)).unwrap_or_else(|_| self.clone())
    }

    /// Complete a stored record against the defaults
    pub fn from_stored(stored: Option<&Value>) -> Self {
        Self::default().merged_with(stored)
    }
}

fn same_kind(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}
