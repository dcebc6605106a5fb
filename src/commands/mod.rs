//! Extension API Wrappers
//!
//! Frontend bindings to the `chrome.*` extension APIs, organized by namespace.
//! Every call first checks that its namespace exists, so the pages keep
//! working in memory when opened outside an extension.

mod runtime;
mod storage;
mod tabs;

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub use runtime::*;
pub use storage::*;
pub use tabs::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "local"], js_name = get)]
    async fn storage_get(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "local"], js_name = set)]
    async fn storage_set(items: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = query)]
    async fn tabs_query(query: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = sendMessage)]
    async fn tabs_send_message(tab_id: i32, message: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "runtime"], js_name = sendMessage)]
    async fn runtime_send_message(message: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("{0} is not available outside the extension")]
    Unavailable(&'static str),
    #[error("extension call failed: {0}")]
    Js(String),
    #[error("payload conversion failed: {0}")]
    Serde(#[from] serde_wasm_bindgen::Error),
    #[error("no active tab to send to")]
    NoActiveTab,
}

impl From<JsValue> for ExtensionError {
    fn from(err: JsValue) -> Self {
        let message = err
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| err.as_string())
            .unwrap_or_else(|| format!("{:?}", err));
        ExtensionError::Js(message)
    }
}

/// Fail early when `chrome.<namespace>` is missing
fn ensure_available(namespace: &'static str) -> Result<(), ExtensionError> {
    let chrome = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("chrome"))
        .ok()
        .filter(|v| v.is_object());
    let found = chrome
        .and_then(|c| js_sys::Reflect::get(&c, &JsValue::from_str(namespace)).ok())
        .is_some_and(|ns| ns.is_object());
    if found {
        Ok(())
    } else {
        Err(ExtensionError::Unavailable(namespace))
    }
}

/// Serialize as plain JS objects (maps become objects, not `Map`)
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, ExtensionError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}
