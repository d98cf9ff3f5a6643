//! Deep merge of mappings where the source takes precedence.
//!
//! - Mappings present on both sides merge recursively per key.
//! - Any other value from the source **replaces** the destination value,
//!   including sequences (no element-wise merge) and `null`.
//! - Keys present on only one side are kept.
//!
//! The destination is updated in place (or consumed, for the owned forms);
//! callers should not rely on the identity of nested destination values
//! surviving the merge.

use serde_json::Value;
use tracing::trace;

use crate::error::{KeyPath, Segment};
use crate::value::{Kind, Mapping};

/// Recursively merge `source` into `destination`.
pub fn merge_into(destination: &mut Mapping, source: &Mapping) {
    for (key, src_val) in source {
        match (destination.get_mut(key), src_val) {
            (Some(Value::Object(dst)), Value::Object(src)) => merge_into(dst, src),
            (Some(dst_val), _) => {
                if dst_val.is_object() {
                    trace!(
                        key = %key,
                        kind = %Kind::of(src_val),
                        "mapping replaced by source value"
                    );
                }
                *dst_val = src_val.clone();
            },
            (None, _) => {
                destination.insert(key.clone(), src_val.clone());
            },
        }
    }
}

/// Merge `source` into `destination`, consuming both.
///
/// Returns the merged mapping; source values are moved rather than cloned.
#[must_use]
pub fn merge(source: Mapping, mut destination: Mapping) -> Mapping {
    for (key, src_val) in source {
        match (destination.get_mut(&key), src_val) {
            (Some(Value::Object(dst)), Value::Object(src)) => {
                let taken = std::mem::take(dst);
                *dst = merge(src, taken);
            },
            (Some(dst_val), src_val) => *dst_val = src_val,
            (None, src_val) => {
                destination.insert(key, src_val);
            },
        }
    }
    destination
}

/// Kind-polymorphic [`merge`]: two mappings merge, otherwise `source` wins.
#[must_use]
pub fn merge_any(source: Value, destination: Value) -> Value {
    match (source, destination) {
        (Value::Object(src), Value::Object(dst)) => Value::Object(merge(src, dst)),
        (src, _) => src,
    }
}

/// Like [`merge_into`], returning the leaf paths written by `source`.
///
/// A leaf is any non-mapping value or an empty mapping. Paths are listed in
/// the source's iteration order.
pub fn merge_tracking(destination: &mut Mapping, source: &Mapping) -> Vec<KeyPath> {
    let mut written = Vec::new();
    merge_tracking_at(destination, source, &KeyPath::root(), &mut written);
    written
}

fn merge_tracking_at(
    destination: &mut Mapping,
    source: &Mapping,
    prefix: &KeyPath,
    written: &mut Vec<KeyPath>,
) {
    for (key, src_val) in source {
        let path = prefix.join(Segment::Key(key.clone()));
        match (destination.get_mut(key), src_val) {
            (Some(Value::Object(dst)), Value::Object(src)) => {
                merge_tracking_at(dst, src, &path, written);
            },
            (Some(dst_val), _) => {
                *dst_val = src_val.clone();
                record_leaves(src_val, path, written);
            },
            (None, _) => {
                destination.insert(key.clone(), src_val.clone());
                record_leaves(src_val, path, written);
            },
        }
    }
}

fn record_leaves(value: &Value, path: KeyPath, written: &mut Vec<KeyPath>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                record_leaves(child, path.join(Segment::Key(key.clone())), written);
            }
        },
        _ => written.push(path),
    }
}
