//! Tolerant reads and writes into `serde_json::Value` trees by field path.
//!
//! Reads return `None` (or the supplied default) when any segment of the path
//! is absent; they never panic. Writes create whatever intermediate
//! containers are missing and leave sibling entries untouched; a write that
//! would have to turn an existing array into an object is refused.

use serde_json::{Map, Value};

use crate::path::{index_segment, FieldPath};

impl FieldPath {
    /// The value at this path, or `None` if any segment is absent.
    pub fn get<'a>(&self, tree: &'a Value) -> Option<&'a Value> {
        if self.is_empty() {
            return None;
        }
        let mut current = tree;
        for segment in self.segments() {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(index_segment(segment)?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Write `value` at this path. Returns `false`, leaving the tree
    /// unchanged, when the path is empty or when it names a non-index key
    /// inside an existing array: that would mean replacing the array and
    /// dropping its elements.
    pub fn set(&self, tree: &mut Value, value: Value) -> bool {
        if self.is_empty() {
            return false;
        }
        if let Some(segment) = self.array_conflict(tree) {
            tracing::warn!(path = %self, segment, "ignoring write of a non-index key into an array");
            return false;
        }
        let mut current = tree;
        for segment in self.segments() {
            current = match slot(current, segment) {
                Some(child) => child,
                None => return false,
            };
        }
        *current = value;
        true
    }

    // First segment that would have to be used as a key on an existing array.
    fn array_conflict<'p>(&'p self, tree: &Value) -> Option<&'p str> {
        let mut current = tree;
        for segment in self.segments() {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => match index_segment(segment) {
                    Some(index) => items.get(index)?,
                    None => return Some(segment.as_str()),
                },
                _ => return None,
            };
        }
        None
    }
}

/// Returns the value at a dotted path, or `None` if any segment is absent.
pub fn get_in<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    FieldPath::parse(path).get(tree)
}

/// Returns the value at a dotted path, or `default` if any segment is absent.
pub fn get_in_or(tree: &Value, path: &str, default: Value) -> Value {
    get_in(tree, path).cloned().unwrap_or(default)
}

/// Writes `value` at a dotted path, creating missing containers.
pub fn set_in(tree: &mut Value, path: &str, value: Value) -> bool {
    FieldPath::parse(path).set(tree, value)
}

/// JavaScript truthiness: `null`, `false`, zero and `""` are falsy, every
/// array and object is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// Child slot for `segment`, converting `node` into a suitable container first.
// Numeric segments index into arrays (padding with null); scalars are replaced.
// An array is never replaced: a non-index key on one yields `None`.
fn slot<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    let index = index_segment(segment);
    let replacement = match (&*node, index) {
        (Value::Array(_), None) => return None,
        (Value::Array(_), Some(_)) | (Value::Object(_), _) => None,
        (_, Some(_)) => Some(Value::Array(Vec::new())),
        (_, None) => Some(Value::Object(Map::new())),
    };
    if let Some(replacement) = replacement {
        *node = replacement;
    }

    match index {
        Some(index) if node.is_array() => {
            if let Value::Array(items) = &mut *node {
                if items.len() <= index {
                    items.resize(index + 1, Value::Null);
                }
            }
            Some(&mut node[index])
        }
        _ => Some(&mut node[segment]),
    }
}
