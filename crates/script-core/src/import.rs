//! Import Normalization
//!
//! Turns untrusted script arrays (dropped files, chosen files, legacy
//! storage records) into identity-complete scripts. Malformed input never
//! fails: bad elements are dropped and non-arrays yield nothing.

use std::collections::HashSet;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{Map, Value};

use crate::error::{ImportError, ImportResult};
use crate::script::{ScriptId, ScriptItem};

/// Normalize an arbitrary decoded value into an ordered list of scripts
pub fn normalize(value: &Value) -> Vec<ScriptItem> {
    let Some(elements) = value.as_array() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut scripts = Vec::with_capacity(elements.len());

    for element in elements {
        let Some(record) = element.as_object() else {
            continue;
        };
        let (Some(title), Some(code)) = (string_field(record, "title"), string_field(record, "code")) else {
            continue;
        };

        let id = match existing_id(record) {
            Some(id) if !seen.contains(&id) => id,
            Some(id) => {
                log::debug!("[IMPORT] duplicate id {}, assigning a fresh one", id);
                ScriptId::generate()
            }
            None => ScriptId::generate(),
        };
        seen.insert(id.clone());

        let auto_execute = record.get("autoExecute").is_some_and(truthy);
        scripts.push(ScriptItem::new(Some(id), title, code, auto_execute));
    }

    if scripts.len() < elements.len() {
        log::debug!("[IMPORT] dropped {} malformed element(s)", elements.len() - scripts.len());
    }
    scripts
}

/// Decode a file read as a data URL and normalize its JSON content
pub fn parse_import_file(file_name: &str, data_url: &str) -> ImportResult<Vec<ScriptItem>> {
    if !file_name.to_ascii_lowercase().ends_with(".json") {
        return Err(ImportError::UnsupportedFile(file_name.to_string()));
    }
    let text = decode_data_url(data_url)?;
    let value: Value = serde_json::from_str(&text)?;
    Ok(normalize(&value))
}

/// Decode the payload of a `data:<mime>;base64,<payload>` URL
pub fn decode_data_url(data_url: &str) -> ImportResult<String> {
    let (header, payload) = data_url
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(','))
        .ok_or(ImportError::MalformedDataUrl)?;
    if !header.ends_with(";base64") {
        return Err(ImportError::MalformedDataUrl);
    }
    let bytes = STANDARD.decode(payload.trim())?;
    Ok(String::from_utf8(bytes)?)
}

fn string_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

fn existing_id(record: &Map<String, Value>) -> Option<ScriptId> {
    match record.get("id")? {
        Value::String(s) if !s.is_empty() => Some(ScriptId::from(s.as_str())),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(ScriptId::from(n.to_string())),
        _ => None,
    }
}

/// JavaScript truthiness of a JSON value
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_array_yields_empty() {
        assert!(normalize(&json!({ "title": "a", "code": "b" })).is_empty());
        assert!(normalize(&json!("scripts")).is_empty());
        assert!(normalize(&Value::Null).is_empty());
    }

    #[test]
    fn test_keeps_existing_ids_and_order() {
        let input = json!([
            { "id": "b", "title": "Second", "code": "2" },
            { "id": "a", "title": "First", "code": "1" },
        ]);
        let scripts = normalize(&input);
        let ids: Vec<&str> = scripts.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(scripts[0].title, "Second");
    }

    #[test]
    fn test_assigns_distinct_ids() {
        let input = json!([
            { "title": "x", "code": "" },
            { "title": "x", "code": "" },
            { "title": "x", "code": "" },
        ]);
        let scripts = normalize(&input);
        let ids: HashSet<_> = scripts.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_drops_elements_missing_title_or_code() {
        let input = json!([
            { "title": "only title" },
            { "code": "only code" },
            { "title": 5, "code": "non-string title" },
            "not an object",
            { "title": "", "code": "" },
        ]);
        let scripts = normalize(&input);
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].title, "");
    }

    #[test]
    fn test_all_invalid_yields_empty() {
        let input = json!([{ "id": "1" }, {}, null, 3]);
        assert!(normalize(&input).is_empty());
    }

    #[test]
    fn test_auto_execute_truthiness() {
        let input = json!([
            { "title": "a", "code": "", "autoExecute": true },
            { "title": "b", "code": "", "autoExecute": 1 },
            { "title": "c", "code": "", "autoExecute": "yes" },
            { "title": "d", "code": "" },
            { "title": "e", "code": "", "autoExecute": 0 },
            { "title": "f", "code": "", "autoExecute": "" },
            { "title": "g", "code": "", "autoExecute": null },
        ]);
        let flags: Vec<bool> = normalize(&input).iter().map(|s| s.auto_execute).collect();
        assert_eq!(flags, vec![true, true, true, false, false, false, false]);
    }

    #[test]
    fn test_numeric_and_invalid_ids() {
        let input = json!([
            { "id": 42, "title": "n", "code": "" },
            { "id": null, "title": "null", "code": "" },
            { "id": "", "title": "empty", "code": "" },
        ]);
        let scripts = normalize(&input);
        assert_eq!(scripts[0].id.as_str(), "42");
        assert_ne!(scripts[1].id.as_str(), "");
        assert_ne!(scripts[2].id.as_str(), "");
        assert_ne!(scripts[1].id, scripts[2].id);
    }

    #[test]
    fn test_duplicate_ids_made_unique() {
        let input = json!([
            { "id": "same", "title": "first", "code": "" },
            { "id": "same", "title": "second", "code": "" },
        ]);
        let scripts = normalize(&input);
        assert_eq!(scripts[0].id.as_str(), "same");
        assert_ne!(scripts[1].id.as_str(), "same");
    }

    #[test]
    fn test_decode_data_url() {
        let url = format!("data:application/json;base64,{}", STANDARD.encode("[1,2]"));
        assert_eq!(decode_data_url(&url).unwrap(), "[1,2]");
    }

    #[test]
    fn test_decode_rejects_non_base64_urls() {
        assert!(matches!(decode_data_url("data:text/plain,hello"), Err(ImportError::MalformedDataUrl)));
        assert!(matches!(decode_data_url("hello"), Err(ImportError::MalformedDataUrl)));
        assert!(matches!(
            decode_data_url("data:application/json;base64,@@@"),
            Err(ImportError::Base64(_))
        ));
    }

    #[test]
    fn test_parse_import_file() {
        let body = r#"[{"title":"Hi","code":"alert('hi')","autoExecute":true}]"#;
        let url = format!("data:application/json;base64,{}", STANDARD.encode(body));
        let scripts = parse_import_file("Backup.JSON", &url).unwrap();
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].code, "alert('hi')");
        assert!(scripts[0].auto_execute);
    }

    #[test]
    fn test_parse_import_file_rejects_other_extensions() {
        let url = format!("data:application/json;base64,{}", STANDARD.encode("[]"));
        assert!(matches!(
            parse_import_file("scripts.txt", &url),
            Err(ImportError::UnsupportedFile(name)) if name == "scripts.txt"
        ));
    }

    #[test]
    fn test_parse_import_file_rejects_invalid_json() {
        let url = format!("data:application/json;base64,{}", STANDARD.encode("not json"));
        assert!(matches!(parse_import_file("a.json", &url), Err(ImportError::Json(_))));
    }
}
