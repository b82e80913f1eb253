use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

use crate::lookup::set_in;

/// Categorization of form errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FormErrorKind {
    /// The form configuration document could not be parsed.
    Config,
    /// Form values could not be decoded into the requested type.
    Decode,
}

impl fmt::Display for FormErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormErrorKind::Config => write!(f, "Config"),
            FormErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Structured error for the fallible edges of form handling.
///
/// Rendering and field lookups never fail; only loading configuration and
/// decoding submitted values into typed structs can.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormError {
    pub kind: FormErrorKind,
    pub message: String,
}

impl FormError {
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: FormErrorKind::Config,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: FormErrorKind::Decode,
            message: message.into(),
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FormError {}

impl From<toml::de::Error> for FormError {
    fn from(err: toml::de::Error) -> Self {
        FormError::config(err.to_string())
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::decode(err.to_string())
    }
}

/// Build an errors tree from a flat `field -> message` map, as returned by
/// server-side validation. Dotted keys become nested entries so they line up
/// with the field paths used by form controls.
pub fn errors_from_field_map(field_errors: &HashMap<String, String>) -> Value {
    let mut tree = Value::Object(Map::new());
    for (field, message) in field_errors {
        set_in(&mut tree, field, Value::String(message.clone()));
    }
    tree
}

/// Build an errors tree from `validator` output. Nested structs and lists stay
/// nested; each field keeps its first message.
#[cfg(feature = "validation")]
pub fn errors_from_validation(errors: &validator::ValidationErrors) -> Value {
    use validator::ValidationErrorsKind;

    let mut tree = Map::new();
    for (field, kind) in errors.errors() {
        let field = field.to_string();
        let entry = match kind {
            ValidationErrorsKind::Field(errs) => match errs.first() {
                Some(first) => Value::String(
                    first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field)),
                ),
                None => continue,
            },
            ValidationErrorsKind::Struct(inner) => errors_from_validation(inner),
            ValidationErrorsKind::List(items) => {
                let mut list = Value::Array(Vec::new());
                for (index, inner) in items {
                    set_in(&mut list, &index.to_string(), errors_from_validation(inner));
                }
                list
            }
        };
        tree.insert(field, entry);
    }
    Value::Object(tree)
}
