//! Exact-key navigation into nested mappings.
//!
//! Lookups never ignore case or coerce types. An empty path addresses
//! nothing.

use serde_json::Value;
use tracing::warn;

use crate::value::Mapping;

/// Look up a value by key path.
///
/// Every segment but the last must name a nested mapping. Returns `None`
/// for an empty path, a missing key, or a non-mapping intermediate.
///
/// ```
/// use serde_json::json;
///
/// let value = json!({"def": {"abc": 1, "xyz": 2}});
/// let map = value.as_object().unwrap();
/// assert_eq!(deepset::path::get(map, &["def", "abc"]), Some(&json!(1)));
/// assert_eq!(deepset::path::get(map, &["def", "nope"]), None);
/// ```
#[must_use]
pub fn get<'a, S: AsRef<str>>(map: &'a Mapping, path: &[S]) -> Option<&'a Value> {
    let (last, parents) = path.split_last()?;
    let mut current = map;
    for segment in parents {
        current = current.get(segment.as_ref())?.as_object()?;
    }
    current.get(last.as_ref())
}

/// Mutable form of [`get`].
pub fn get_mut<'a, S: AsRef<str>>(map: &'a mut Mapping, path: &[S]) -> Option<&'a mut Value> {
    let (last, parents) = path.split_last()?;
    let mut current = map;
    for segment in parents {
        current = current.get_mut(segment.as_ref())?.as_object_mut()?;
    }
    current.get_mut(last.as_ref())
}

/// Set a value at a nested path, creating intermediate mappings as needed.
///
/// Returns `false` without changing anything when the path is empty or an
/// existing intermediate value is not a mapping.
pub fn set<S: AsRef<str>>(map: &mut Mapping, path: &[S], value: Value) -> bool {
    let Some((last, parents)) = path.split_last() else {
        return false;
    };

    let mut current = map;
    for segment in parents {
        let segment = segment.as_ref();
        let next = current
            .entry(segment)
            .or_insert_with(|| Value::Object(Mapping::new()));
        let Some(table) = next.as_object_mut() else {
            warn!("set: intermediate value at '{segment}' is not a mapping; skipping");
            return false;
        };
        current = table;
    }

    current.insert(last.as_ref().to_owned(), value);
    true
}

/// Remove and return the value at a nested path.
pub fn remove<S: AsRef<str>>(map: &mut Mapping, path: &[S]) -> Option<Value> {
    let (last, parents) = path.split_last()?;
    let mut current = map;
    for segment in parents {
        current = current.get_mut(segment.as_ref())?.as_object_mut()?;
    }
    current.remove(last.as_ref())
}
