//! Deep merge for JSON documents that sub-generators extend.

use serde_json::{Map, Value};

/// Merge `patch` into `base`.
///
/// Objects merge key by key, recursively; new keys are appended after the
/// existing ones. Any other value in `patch` replaces the one in `base`.
pub fn extend(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(key) {
                    Some(existing) => extend(existing, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, patch) => *base = patch.clone(),
    }
}

/// Set `key` only when the object does not already have it.
///
/// Returns whether the value was inserted.
pub fn insert_if_absent(object: &mut Map<String, Value>, key: &str, value: Value) -> bool {
    if object.contains_key(key) {
        return false;
    }
    object.insert(key.to_string(), value);
    true
}
