//! Runtime Commands
//!
//! Messages for the background worker.

use script_core::UiMessage;

use super::{ensure_available, runtime_send_message, to_js, ExtensionError};

/// Ask the background worker to export every stored script
pub async fn request_export() -> Result<(), ExtensionError> {
    ensure_available("runtime")?;
    runtime_send_message(to_js(&UiMessage::ExportScripts)?).await?;
    log::info!("[EXPORT] export requested");
    Ok(())
}
