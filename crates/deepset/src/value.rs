//! Value model helpers.
//!
//! Values are plain [`serde_json::Value`] trees, so anything a serde decoder
//! produces can be compared and merged. This module classifies values into
//! a closed set of kinds and defines the scalar rendering used by weak-type
//! comparison.

use std::fmt;

use serde_json::{Number, Value};

/// A JSON-like mapping from string keys to values.
pub type Mapping = serde_json::Map<String, Value>;

/// The dynamic kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `null`.
    Null,
    /// `true` / `false`.
    Bool,
    /// Integer or floating-point number.
    Number,
    /// UTF-8 string.
    String,
    /// Ordered sequence of values.
    Sequence,
    /// String-keyed mapping of values.
    Mapping,
}

impl Kind {
    /// Classify a value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Sequence,
            Value::Object(_) => Self::Mapping,
        }
    }

    /// Whether values of this kind are leaves rather than containers.
    #[must_use]
    pub fn is_scalar(self) -> bool {
        !matches!(self, Self::Sequence | Self::Mapping)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// Canonical string form of a scalar, or `None` for containers.
///
/// Integers render as plain decimals. Floats use the shortest round-trip
/// digits without a trailing `.0`, switching to `d.ddde±XX` when the
/// decimal exponent is below -4 or at least 6 (so `2.0` renders `2` and
/// `1e21` renders `1e+21`). Thus `2`, `2.0` and `"2"` all render as `2`.
/// Strings render unquoted.
#[must_use]
pub fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_owned()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(render_number(n)),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Rendering for diagnostics: scalars canonically, containers as JSON.
pub(crate) fn describe(value: &Value) -> String {
    render_scalar(value).unwrap_or_else(|| value.to_string())
}

fn render_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    n.as_f64().map_or_else(|| n.to_string(), render_float)
}

/// Exponent at or above which shortest float rendering uses `e` notation.
const FLOAT_EXP_UPPER: i32 = 6;
/// Exponent below which shortest float rendering uses `e` notation.
const FLOAT_EXP_LOWER: i32 = -4;

fn render_float(f: f64) -> String {
    let sci = format!("{f:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{f}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return format!("{f}");
    };

    if (FLOAT_EXP_LOWER..FLOAT_EXP_UPPER).contains(&exp) {
        format!("{f}")
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

/// Numeric equality: exact for integers, `f64` otherwise.
#[allow(clippy::float_cmp)]
pub(crate) fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Case-insensitive string equality under simple per-character folding.
///
/// Strings must have the same number of characters, and each pair must be
/// equal, share a lower-case mapping, or share an upper-case mapping. So
/// `ς`, `σ` and `Σ` fold together, while `ß` never matches `ss`.
#[must_use]
pub fn eq_fold(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }

    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if chars_fold(x, y) => {},
            _ => return false,
        }
    }
}

fn chars_fold(x: char, y: char) -> bool {
    x == y || x.to_lowercase().eq(y.to_lowercase()) || x.to_uppercase().eq(y.to_uppercase())
}
