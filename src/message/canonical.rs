//! Canonical JSON form of a payload.
//!
//! Object keys are sorted lexicographically at every depth, the output is compact
//! (no whitespace), and the top-level credential fields are removed. Numbers and
//! strings use `serde_json`'s formatting, which is stable for a given value.
//! Sorting is explicit so the result does not depend on whether `serde_json` was
//! built with `preserve_order`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::message::{ADDRESS_FIELD, SIGNATURE_FIELD};

/// Serialize `payload` to its canonical byte form.
pub fn to_canonical_bytes<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut value = serde_json::to_value(payload)?;
    if let Value::Object(map) = &mut value {
        map.remove(SIGNATURE_FIELD);
        map.remove(ADDRESS_FIELD);
    }
    serde_json::to_vec(&sort_keys(value))
}

/// Rebuild every object in `value` with its keys in lexicographic order.
pub fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted = Map::with_capacity(entries.len());
            for (key, inner) in entries {
                sorted.insert(key, sort_keys(inner));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
