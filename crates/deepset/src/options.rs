//! Comparison policy.

use serde::{Deserialize, Serialize};

/// Policy applied by every subset check.
///
/// The same options are passed unchanged through the whole recursive
/// comparison, including membership checks inside sequences.
///
/// Embeds in a caller's configuration file; a bare section yields the
/// defaults:
///
/// ```toml
/// [compare]
/// case_insensitive_keys = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Resolve mapping keys ignoring case when no exact key exists, and
    /// compare string values ignoring case. Case is folded per character
    /// (see [`eq_fold`](crate::eq_fold)), so multi-character expansions
    /// such as `ß` to `ss` never match. Default `false`.
    pub case_insensitive_keys: bool,
    /// Compare scalars of different kinds by their canonical rendering
    /// instead of failing on the kind mismatch. Default `true`.
    pub weak_type_comparison: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            case_insensitive_keys: false,
            weak_type_comparison: true,
        }
    }
}

impl CompareOptions {
    /// Default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with weak typing disabled.
    #[must_use]
    pub fn strict() -> Self {
        Self::default().with_weak_type_comparison(false)
    }

    /// Set case-insensitive key lookup.
    #[must_use]
    pub fn with_case_insensitive_keys(mut self, enabled: bool) -> Self {
        self.case_insensitive_keys = enabled;
        self
    }

    /// Set weak-type scalar comparison.
    #[must_use]
    pub fn with_weak_type_comparison(mut self, enabled: bool) -> Self {
        self.weak_type_comparison = enabled;
        self
    }
}
