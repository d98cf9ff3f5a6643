//! Test fixtures for nested values.

use deepset::Mapping;
use serde_json::{Value, json};

/// Unwrap a `json!` object literal into a [`Mapping`].
///
/// # Panics
///
/// Panics if `value` is not an object.
#[must_use]
pub fn mapping(value: Value) -> Mapping {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not a mapping: {other}"),
    }
}

/// Unwrap a `json!` array literal into a sequence.
///
/// # Panics
///
/// Panics if `value` is not an array.
#[must_use]
pub fn sequence(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => panic!("fixture is not a sequence: {other}"),
    }
}

/// An API-style payload with nested mappings and sequences of objects.
#[must_use]
pub fn sample_payload() -> Mapping {
    mapping(json!({
        "user": {"id": 7, "Name": "Ada", "roles": ["admin", "dev"]},
        "items": [
            {"sku": "A-1", "qty": 2, "price": 9.5},
            {"sku": "B-2", "qty": 1, "price": 20}
        ],
        "active": true,
        "note": null
    }))
}

/// A chain `a ⊆ b ⊆ c` under default options.
#[must_use]
pub fn subset_chain() -> (Value, Value, Value) {
    let c = json!({
        "a": 1,
        "b": {"x": 1, "y": [1, 2, 3], "z": "s"},
        "c": [{"k": 1, "v": 2}, {"k": 2}]
    });
    let b = json!({
        "a": "1",
        "b": {"x": 1.0, "y": [3, 1]},
        "c": [{"k": 1}]
    });
    let a = json!({
        "b": {"y": ["3"]},
        "c": [{}]
    });
    (a, b, c)
}
