use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FormError;
use crate::lookup::is_truthy;
use crate::path::FieldPath;

/// Everything a form knows about its fields, keyed by field path.
///
/// `values`, `touched` and `errors` are independent trees with the same shape.
/// Controls only ever read them through [`FormState::field_snapshot`] and write
/// them through the setters, so a missing branch is never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub values: Value,
    #[serde(default = "empty_tree")]
    pub touched: Value,
    #[serde(default = "empty_tree")]
    pub errors: Value,
    #[serde(default)]
    pub submit_count: u32,
    #[serde(default)]
    pub is_submitting: bool,
}

fn empty_tree() -> Value {
    Value::Object(Map::new())
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(empty_tree())
    }
}

/// What a single control needs to render: its value and validation status.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSnapshot {
    /// Current value, `null` when the path is absent.
    pub value: Value,
    /// Whether the user has interacted with the field.
    pub touched: bool,
    /// Raw error text. An empty string is kept so callers can tell "present
    /// but blank" from "absent".
    pub error: Option<String>,
}

impl FieldSnapshot {
    /// True when there is non-empty error text.
    pub fn has_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// Touched and carrying an error.
    pub fn is_invalid(&self) -> bool {
        self.touched && self.has_error()
    }
}

impl FormState {
    pub fn new(initial_values: Value) -> Self {
        Self {
            values: initial_values,
            touched: empty_tree(),
            errors: empty_tree(),
            submit_count: 0,
            is_submitting: false,
        }
    }

    pub fn field_snapshot(&self, path: &str) -> FieldSnapshot {
        let path = FieldPath::parse(path);
        FieldSnapshot {
            value: path.get(&self.values).cloned().unwrap_or(Value::Null),
            touched: path.get(&self.touched).is_some_and(is_truthy),
            error: path.get(&self.errors).and_then(error_text),
        }
    }

    /// Write a value at `path`. Returns `false` when the path addresses nothing.
    pub fn set_field_value(&mut self, path: &str, value: Value) -> bool {
        let written = FieldPath::parse(path).set(&mut self.values, value);
        if !written {
            tracing::warn!(path, "ignoring value write that addresses no field");
        }
        written
    }

    pub fn set_field_touched(&mut self, path: &str, touched: bool) -> bool {
        FieldPath::parse(path).set(&mut self.touched, Value::Bool(touched))
    }

    pub fn set_field_error(&mut self, path: &str, message: impl Into<String>) -> bool {
        FieldPath::parse(path).set(&mut self.errors, Value::String(message.into()))
    }

    /// Mark every leaf of the values tree as touched, mirroring its shape.
    pub fn touch_all(&mut self) {
        self.touched = mirror_leaves(&self.values);
    }

    /// True when no leaf of the errors tree is truthy.
    pub fn is_valid(&self) -> bool {
        !has_truthy_leaf(&self.errors)
    }

    /// Decode the current values into a typed struct.
    pub fn values_as<T: DeserializeOwned>(&self) -> Result<T, FormError> {
        Ok(serde_json::from_value(self.values.clone())?)
    }
}

/// Message shown for an error recorded as a bare `true`.
pub const GENERIC_ERROR: &str = "Invalid value";

fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        // A bare `true` flags the field without saying why.
        Value::Bool(true) => Some(GENERIC_ERROR.to_string()),
        Value::Number(_) if is_truthy(value) => Some(value.to_string()),
        // A container here holds errors for child fields, not for this one.
        _ => None,
    }
}

fn mirror_leaves(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, child)| (key.clone(), mirror_leaves(child)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(mirror_leaves).collect()),
        _ => Value::Bool(true),
    }
}

fn has_truthy_leaf(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.values().any(has_truthy_leaf),
        Value::Array(items) => items.iter().any(has_truthy_leaf),
        leaf => is_truthy(leaf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn state(touched: Value, errors: Value) -> FormState {
        FormState {
            touched,
            errors,
            ..FormState::new(json!({ "address": { "country": "NZ" } }))
        }
    }

    #[test]
    fn snapshot_reads_nested_value_touched_and_error() {
        let form = state(
            json!({ "address": { "country": true } }),
            json!({ "address": { "country": "Required" } }),
        );
        let snap = form.field_snapshot("address.country");
        assert_eq!(snap.value, json!("NZ"));
        assert!(snap.touched);
        assert_eq!(snap.error.as_deref(), Some("Required"));
        assert!(snap.is_invalid());
    }

    #[test]
    fn snapshot_of_missing_path_is_blank() {
        let form = FormState::default();
        assert_eq!(form.field_snapshot("a.b.c"), FieldSnapshot::default());
    }

    #[test]
    fn untouched_field_is_never_invalid() {
        let form = state(json!({}), json!({ "address": { "country": "Required" } }));
        let snap = form.field_snapshot("address.country");
        assert!(!snap.touched);
        assert!(snap.has_error());
        assert!(!snap.is_invalid());
    }

    #[test]
    fn empty_error_text_is_kept_but_not_an_error() {
        let form = state(
            json!({ "address": { "country": true } }),
            json!({ "address": { "country": "" } }),
        );
        let snap = form.field_snapshot("address.country");
        assert_eq!(snap.error.as_deref(), Some(""));
        assert!(!snap.has_error());
        assert!(!snap.is_invalid());
    }

    #[test]
    fn boolean_errors_use_generic_message() {
        let form = state(
            json!({ "address": { "country": true, "city": true } }),
            json!({ "address": { "country": true, "city": false } }),
        );
        let flagged = form.field_snapshot("address.country");
        assert_eq!(flagged.error.as_deref(), Some(GENERIC_ERROR));
        assert!(flagged.is_invalid());

        let cleared = form.field_snapshot("address.city");
        assert_eq!(cleared.error, None);
        assert!(!cleared.is_invalid());
    }

    #[test]
    fn container_errors_belong_to_children() {
        let form = state(
            json!({ "address": true }),
            json!({ "address": { "country": "Required" } }),
        );
        assert_eq!(form.field_snapshot("address").error, None);
    }

    #[test]
    fn setters_write_only_their_path() {
        let mut form = FormState::new(json!({ "address": { "country": "NZ", "city": "Nelson" } }));
        assert!(form.set_field_value("address.country", json!("AU")));
        assert!(form.set_field_touched("address.country", true));
        assert!(form.set_field_error("address.country", "Unsupported"));
        assert_eq!(form.values, json!({ "address": { "country": "AU", "city": "Nelson" } }));
        assert_eq!(form.touched, json!({ "address": { "country": true } }));
        assert_eq!(form.errors, json!({ "address": { "country": "Unsupported" } }));
    }

    #[test]
    fn empty_path_write_is_ignored() {
        let mut form = FormState::default();
        assert!(!form.set_field_value("", json!(1)));
        assert_eq!(form.values, json!({}));
    }

    #[test]
    fn touch_all_mirrors_value_shape() {
        let mut form = FormState::new(json!({ "name": "x", "tags": ["a", "b"], "address": { "country": null } }));
        form.touch_all();
        assert_eq!(
            form.touched,
            json!({ "name": true, "tags": [true, true], "address": { "country": true } })
        );
    }

    #[test]
    fn validity_ignores_blank_leaves() {
        let mut form = FormState::default();
        assert!(form.is_valid());
        form.errors = json!({ "address": { "country": "" }, "tags": [null] });
        assert!(form.is_valid());
        form.errors = json!({ "tags": [null, "Too long"] });
        assert!(!form.is_valid());
    }

    #[test]
    fn values_decode_into_typed_structs() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Address {
            country: String,
        }
        #[derive(Debug, Deserialize, PartialEq)]
        struct Shipping {
            address: Address,
        }

        let form = FormState::new(json!({ "address": { "country": "NZ" } }));
        let decoded: Shipping = form.values_as().unwrap();
        assert_eq!(decoded.address.country, "NZ");

        let err = FormState::default().values_as::<Shipping>().unwrap_err();
        assert_eq!(err.kind, crate::FormErrorKind::Decode);
    }
}
