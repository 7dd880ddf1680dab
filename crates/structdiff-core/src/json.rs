/// Conversion from JSON documents into [`Value`] trees.
///
/// JSON has no `undefined`, no functions, no sparse arrays, and no
/// prototypes, so every converted container is dense (arrays) or in document
/// order (objects) with a `Null` prototype.
use std::fmt;

use crate::value::{Container, ContainerKind, Value};

// ---------------------------------------------------------------------------
// ConvertError
// ---------------------------------------------------------------------------

/// Errors produced while turning JSON text into a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The input text is not a well-formed JSON document.
    InvalidJson {
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
        /// Parser message, including the position.
        detail: String,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson { detail, .. } => write!(f, "invalid JSON: {detail}"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<serde_json::Error> for ConvertError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidJson {
            line: e.line(),
            column: e.column(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

impl Value {
    /// Parses `text` as a single JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidJson`] if `text` is not valid JSON.
    pub fn from_json_str(text: &str) -> Result<Self, ConvertError> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from(json))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::array(items),
            serde_json::Value::Object(map) => {
                let container = Container::new(ContainerKind::Object);
                for (key, value) in map {
                    container.insert(key, value);
                }
                Self::Container(container)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
