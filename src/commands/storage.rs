//! Storage Commands
//!
//! `chrome.storage.local` records: `scripts` (ordered script array) and
//! `setting` (global options).

use serde::Serialize;
use serde_json::Value;

use script_core::{normalize, ScriptItem, Settings};

use super::{ensure_available, storage_get, storage_set, to_js, ExtensionError};

const NAMESPACE: &str = "storage";
pub const SCRIPTS_KEY: &str = "scripts";
pub const SETTING_KEY: &str = "setting";

// ========================
// Records
// ========================

#[derive(Serialize)]
struct ScriptsRecord<'a> {
    scripts: &'a [ScriptItem],
}

#[derive(Serialize)]
struct SettingRecord<'a> {
    setting: &'a Settings,
}

/// Everything the popup needs at start-up
#[derive(Debug, Clone, Default)]
pub struct PopupState {
    pub scripts: Vec<ScriptItem>,
    pub settings: Settings,
}

// ========================
// Commands
// ========================

async fn get_record(keys: &[&str]) -> Result<Value, ExtensionError> {
    ensure_available(NAMESPACE)?;
    let result = storage_get(to_js(keys)?).await?;
    Ok(serde_wasm_bindgen::from_value(result)?)
}

/// Read scripts and settings. Stored scripts go through the normalizer so
/// legacy records without ids get one.
pub async fn load_popup_state() -> Result<PopupState, ExtensionError> {
    let record = get_record(&[SCRIPTS_KEY, SETTING_KEY]).await?;
    let scripts = record.get(SCRIPTS_KEY).map(normalize).unwrap_or_default();
    let settings = Settings::from_stored(record.get(SETTING_KEY));
    log::info!("[STORAGE] loaded {} scripts", scripts.len());
    Ok(PopupState { scripts, settings })
}

pub async fn load_settings() -> Result<Settings, ExtensionError> {
    let record = get_record(&[SETTING_KEY]).await?;
    Ok(Settings::from_stored(record.get(SETTING_KEY)))
}

/// Replace the stored `scripts` record
pub async fn save_scripts(scripts: &[ScriptItem]) -> Result<(), ExtensionError> {
    ensure_available(NAMESPACE)?;
    storage_set(to_js(&ScriptsRecord { scripts })?).await?;
    log::debug!("[STORAGE] saved {} scripts", scripts.len());
    Ok(())
}

pub async fn save_settings(settings: &Settings) -> Result<(), ExtensionError> {
    ensure_available(NAMESPACE)?;
    storage_set(to_js(&SettingRecord { setting: settings })?).await?;
    log::debug!("[STORAGE] saved settings {:?}", settings);
    Ok(())
}
