//! Dropped/Chosen File Import
//!
//! Reads a user-supplied file as a data URL and runs it through the import
//! normalizer.

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList, FileReader};

use script_core::{parse_import_file, ImportError, ScriptItem};

#[derive(Debug, Error)]
pub enum FileImportError {
    #[error("could not read file: {0}")]
    Read(String),
    #[error(transparent)]
    Import(#[from] ImportError),
}

impl From<JsValue> for FileImportError {
    fn from(err: JsValue) -> Self {
        FileImportError::Read(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

/// Only the first file of a selection or drop is considered
pub fn first_file(files: Option<FileList>) -> Option<File> {
    files?.get(0)
}

/// `FileReader.readAsDataURL` as a future
async fn read_as_data_url(file: &File) -> Result<String, FileImportError> {
    let reader = FileReader::new()?;
    let mut handlers = None;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let done = reader.clone();
        let onload = Closure::<dyn FnMut()>::new(move || {
            let result = done.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::<dyn FnMut()>::new(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("read failed"));
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        handlers = Some((onload, onerror));
    });

    let outcome = match reader.read_as_data_url(file) {
        Ok(()) => JsFuture::from(promise).await,
        Err(e) => Err(e),
    };
    // detach before freeing both closures, whichever one fired
    reader.set_onload(None);
    reader.set_onerror(None);
    drop(handlers);

    outcome?
        .as_string()
        .ok_or_else(|| FileImportError::Read("reader result is not text".to_string()))
}

/// Read and normalize an import file
pub async fn import_file(file: File) -> Result<Vec<ScriptItem>, FileImportError> {
    let name = file.name();
    if !name.to_lowercase().ends_with(".json") {
        return Err(ImportError::UnsupportedFile(name).into());
    }
    let data_url = read_as_data_url(&file).await?;
    let scripts = parse_import_file(&name, &data_url)?;
    log::info!("[IMPORT] {} scripts read from {}", scripts.len(), name);
    Ok(scripts)
}
