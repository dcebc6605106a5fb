//! Import Errors
//!
//! Failures while turning a dropped or chosen file into scripts. The UI
//! absorbs all of these (the import is simply ignored); they exist so the
//! cause can be logged.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("malformed data URL")]
    MalformedDataUrl,

    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("file is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ImportResult<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ImportError = json_err.into();
        assert!(matches!(err, ImportError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_error_display() {
        let err = ImportError::UnsupportedFile("notes.txt".to_string());
        assert_eq!(err.to_string(), "unsupported file: notes.txt");
        assert_eq!(ImportError::MalformedDataUrl.to_string(), "malformed data URL");
    }
}
