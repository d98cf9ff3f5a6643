//! Recursive subset checks over mappings and sequences.
//!
//! A subset holds when every key of the subset mapping resolves in the
//! superset mapping with an equal value (under [`CompareOptions`]), and every
//! element of a subset sequence is matched by some element of the superset
//! sequence. Checks stop at the first failure.
//!
//! Sequence membership is not multiset membership: two identical subset
//! elements are both satisfied by a single matching superset element.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{KeyPath, Segment, SubsetError, SubsetResult};
use crate::options::CompareOptions;
use crate::value::{Kind, Mapping, describe, eq_fold, numbers_equal, render_scalar};

/// Check that `subset` is contained in `superset`.
///
/// Only mappings and sequences are valid roots, and both sides must share
/// the same root kind.
///
/// # Errors
///
/// Returns the first [`SubsetError`] encountered.
pub fn is_subset(superset: &Value, subset: &Value, opts: CompareOptions) -> SubsetResult<()> {
    let result = match (superset, subset) {
        (Value::Object(set), Value::Object(sub)) => is_map_subset(set, sub, opts),
        (Value::Array(set), Value::Array(sub)) => is_slice_subset(set, sub, opts),
        _ => Err(SubsetError::TypeMismatch {
            path: KeyPath::root(),
            superset: Kind::of(superset),
            subset: Kind::of(subset),
        }),
    };

    if let Err(err) = &result {
        debug!(error = %err, "subset check failed");
    }
    result
}

/// Boolean form of [`is_subset`].
#[must_use]
pub fn contains(superset: &Value, subset: &Value, opts: CompareOptions) -> bool {
    is_subset(superset, subset, opts).is_ok()
}

/// Check that every key of `subset` resolves in `superset` with a matching
/// value.
///
/// # Errors
///
/// Returns [`SubsetError::SizeMismatch`] when `subset` has more keys than
/// `superset`, otherwise the first failing key's error.
pub fn is_map_subset(
    superset: &Mapping,
    subset: &Mapping,
    opts: CompareOptions,
) -> SubsetResult<()> {
    if subset.len() > superset.len() {
        return Err(SubsetError::SizeMismatch {
            path: KeyPath::root(),
            superset: superset.len(),
            subset: subset.len(),
        });
    }

    for (key, sub_val) in subset {
        let Some(set_val) = resolve_key(superset, key, opts) else {
            return Err(SubsetError::KeyNotFound {
                path: KeyPath::root(),
                key: key.clone(),
            });
        };
        compare_entry(set_val, sub_val, opts)
            .map_err(|err| err.within(Segment::Key(key.clone())))?;
    }

    Ok(())
}

/// Check that every element of `subset` is a member of `superset`.
///
/// Order and duplicates in `subset` are irrelevant.
///
/// # Errors
///
/// Returns [`SubsetError::NotFound`] for the first element with no match.
pub fn is_slice_subset(
    superset: &[Value],
    subset: &[Value],
    opts: CompareOptions,
) -> SubsetResult<()> {
    for (idx, value) in subset.iter().enumerate() {
        is_slice_contains(superset, value, opts).map_err(|err| err.within(Segment::Index(idx)))?;
    }
    Ok(())
}

/// Check that some element of `sequence` matches `value`.
///
/// Scalars match by [`values_equal`]. A mapping or sequence probe matches an
/// element of the same kind that contains it: the element plays the
/// superset role and the probe the subset role.
///
/// # Errors
///
/// Returns [`SubsetError::NotFound`] when no element matches.
pub fn is_slice_contains(
    sequence: &[Value],
    value: &Value,
    opts: CompareOptions,
) -> SubsetResult<()> {
    let found = sequence.iter().any(|element| match (element, value) {
        (Value::Object(set), Value::Object(sub)) => is_map_subset(set, sub, opts).is_ok(),
        (Value::Array(set), Value::Array(sub)) => is_slice_subset(set, sub, opts).is_ok(),
        (set, sub) if is_scalar(set) && is_scalar(sub) => values_equal(set, sub, opts),
        _ => false,
    });

    if found {
        Ok(())
    } else {
        Err(SubsetError::NotFound {
            path: KeyPath::root(),
            value: describe(value),
        })
    }
}

/// Scalar equality under `opts`.
///
/// Strings compare ignoring case when case-insensitivity is on. Same-kind
/// scalars compare natively, numbers numerically. Different kinds compare
/// by canonical rendering when weak typing is on, otherwise they differ.
/// Containers are never equal under this rule.
#[must_use]
pub fn values_equal(a: &Value, b: &Value, opts: CompareOptions) -> bool {
    match (a, b) {
        (Value::String(x), Value::String(y)) if opts.case_insensitive_keys => eq_fold(x, y),
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        _ if opts.weak_type_comparison => match (render_scalar(a), render_scalar(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
        _ => false,
    }
}

fn compare_entry(set_val: &Value, sub_val: &Value, opts: CompareOptions) -> SubsetResult<()> {
    let (set_kind, sub_kind) = (Kind::of(set_val), Kind::of(sub_val));
    let type_mismatch = || SubsetError::TypeMismatch {
        path: KeyPath::root(),
        superset: set_kind,
        subset: sub_kind,
    };

    if !opts.weak_type_comparison && set_kind != sub_kind {
        return Err(type_mismatch());
    }

    match (set_val, sub_val) {
        (Value::Object(set), Value::Object(sub)) => is_map_subset(set, sub, opts),
        (Value::Array(set), Value::Array(sub)) => is_slice_subset(set, sub, opts),
        (set, sub) if set_kind.is_scalar() && sub_kind.is_scalar() => {
            if values_equal(sub, set, opts) {
                Ok(())
            } else {
                Err(SubsetError::ValueMismatch {
                    path: KeyPath::root(),
                    superset: describe(set),
                    subset: describe(sub),
                })
            }
        },
        _ => Err(type_mismatch()),
    }
}

/// Exact key first, then the first case-insensitive match if enabled.
///
/// Which key wins among several case variants follows the mapping's
/// iteration order and is not guaranteed.
fn resolve_key<'a>(superset: &'a Mapping, key: &str, opts: CompareOptions) -> Option<&'a Value> {
    if let Some(value) = superset.get(key) {
        return Some(value);
    }
    if !opts.case_insensitive_keys {
        return None;
    }

    let (resolved, value) = superset.iter().find(|(candidate, _)| eq_fold(candidate, key))?;
    trace!(key, resolved = %resolved, "resolved key ignoring case");
    Some(value)
}

fn is_scalar(value: &Value) -> bool {
    Kind::of(value).is_scalar()
}
