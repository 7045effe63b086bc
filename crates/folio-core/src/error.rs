//! Error types for folio-core
//!
//! The interactive core (menu, anchors, scrolling) never fails; these errors
//! only cover loading the site configuration and the content document.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for folio operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {origin}: {message}")]
    JsonParse {
        /// File path, or `<embedded>` for the built-in content
        origin: String,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    // ===================
    // Validation Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid content: {message}")]
    InvalidContent { message: String },
}

impl CoreError {
    pub(crate) fn json(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonParse {
            origin: origin.into(),
            message: source.to_string(),
            source,
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    /// Actionable hint shown by the CLI next to the error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::FileRead { path, .. } => Some(format!(
                "Check that the file exists and is readable: ls -l {}",
                path.display()
            )),
            CoreError::JsonParse { .. } => {
                Some("Validate JSON syntax with: jq . <file>".to_string())
            }
            CoreError::InvalidConfig { .. } => {
                Some("Print the defaults with: folio config".to_string())
            }
            CoreError::InvalidContent { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_keeps_origin_and_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CoreError::json("site.json", source);

        let rendered = err.to_string();
        assert!(rendered.contains("site.json"));
        assert!(rendered.contains("EOF"));
        assert!(err.suggestion().unwrap().contains("jq"));
    }

    #[test]
    fn test_content_error_has_no_suggestion() {
        let err = CoreError::invalid_content("no projects");
        assert_eq!(err.to_string(), "Invalid content: no projects");
        assert!(err.suggestion().is_none());
    }
}
