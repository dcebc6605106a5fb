//! Extension Messages
//!
//! Payloads sent to the content script (run a snippet) and to the
//! background worker (export scripts).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiMessage {
    /// Run a snippet in the active tab
    #[serde(rename = "EMIT_CODE")]
    EmitCode { code: String },
    /// Ask the background worker to export all stored scripts
    #[serde(rename = "EXPORT_SCRIPTS")]
    ExportScripts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_emit_code_shape() {
        let msg = UiMessage::EmitCode { code: "alert(1)".to_string() };
        assert_eq!(serde_json::to_value(&msg).unwrap(), json!({ "type": "EMIT_CODE", "code": "alert(1)" }));
    }

    #[test]
    fn test_export_shape() {
        assert_eq!(serde_json::to_value(UiMessage::ExportScripts).unwrap(), json!({ "type": "EXPORT_SCRIPTS" }));
    }
}
