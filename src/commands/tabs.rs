//! Tab Commands
//!
//! Sends a snippet to the content script of the active tab.

use serde::{Deserialize, Serialize};

use script_core::UiMessage;

use super::{ensure_available, tabs_query, tabs_send_message, to_js, ExtensionError};

const NAMESPACE: &str = "tabs";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ActiveTabQuery {
    active: bool,
    current_window: bool,
}

#[derive(Deserialize)]
struct TabInfo {
    id: Option<i32>,
}

/// Run `code` in the active tab of the current window
pub async fn emit_code(code: &str) -> Result<(), ExtensionError> {
    ensure_available(NAMESPACE)?;

    let query = to_js(&ActiveTabQuery { active: true, current_window: true })?;
    let tabs: Vec<TabInfo> = serde_wasm_bindgen::from_value(tabs_query(query).await?)?;
    let tab_id = tabs.first().and_then(|t| t.id).ok_or(ExtensionError::NoActiveTab)?;

    let message = to_js(&UiMessage::EmitCode { code: code.to_string() })?;
    tabs_send_message(tab_id, message).await?;
    log::debug!("[TABS] sent code to tab {}", tab_id);
    Ok(())
}
