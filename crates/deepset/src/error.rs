//! Subset comparison error types.

use std::fmt;

use thiserror::Error;

use crate::value::Kind;

/// One step into a nested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Mapping key.
    Key(String),
    /// Sequence position.
    Index(usize),
}

/// Location of a failure, addressed in the coordinates of the subset value.
///
/// Renders as `$` for the root, `$.a.b` for mapping keys and `$.a[2]` for
/// sequence positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPath(Vec<Segment>);

impl KeyPath {
    /// The root path.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Path with a single key segment.
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self(vec![Segment::Key(key.into())])
    }

    /// Segments from the root down.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a segment, returning the extended path.
    #[must_use]
    pub fn join(&self, segment: Segment) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment);
        Self(segments)
    }

    fn prepend(&mut self, segment: Segment) {
        self.0.insert(0, segment);
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

/// Reasons a value is not a subset of another.
///
/// Checks are fail-fast: only the first failure encountered is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubsetError {
    /// Kinds are incompatible: the root is not a mapping or sequence, strict
    /// typing saw two different kinds, or a mapping met a sequence.
    #[error("type mismatch at {path}: superset is {superset}, subset is {subset}")]
    TypeMismatch {
        /// Where the mismatch occurred.
        path: KeyPath,
        /// Kind found in the superset.
        superset: Kind,
        /// Kind found in the subset.
        subset: Kind,
    },

    /// The subset mapping has more keys than the superset mapping.
    #[error("size mismatch at {path}: subset has {subset} keys, superset has {superset}")]
    SizeMismatch {
        /// Path of the mapping.
        path: KeyPath,
        /// Number of keys in the superset mapping.
        superset: usize,
        /// Number of keys in the subset mapping.
        subset: usize,
    },

    /// A subset key has no counterpart in the superset mapping.
    #[error("key '{key}' not found in superset at {path}")]
    KeyNotFound {
        /// Path of the mapping that was searched.
        path: KeyPath,
        /// The missing key.
        key: String,
    },

    /// Two scalar values differ under the active equality policy.
    #[error("value mismatch at {path}: superset has {superset}, subset has {subset}")]
    ValueMismatch {
        /// Path of the compared value.
        path: KeyPath,
        /// Canonical rendering of the superset value.
        superset: String,
        /// Canonical rendering of the subset value.
        subset: String,
    },

    /// No element of the superset sequence matches the probe value.
    #[error("value {value} not found in sequence at {path}")]
    NotFound {
        /// Path of the probe within the subset.
        path: KeyPath,
        /// Rendering of the probe value.
        value: String,
    },
}

impl SubsetError {
    /// Location of the failure.
    #[must_use]
    pub fn path(&self) -> &KeyPath {
        match self {
            Self::TypeMismatch { path, .. }
            | Self::SizeMismatch { path, .. }
            | Self::KeyNotFound { path, .. }
            | Self::ValueMismatch { path, .. }
            | Self::NotFound { path, .. } => path,
        }
    }

    /// Re-root this error beneath `segment`.
    #[must_use]
    pub(crate) fn within(mut self, segment: Segment) -> Self {
        match &mut self {
            Self::TypeMismatch { path, .. }
            | Self::SizeMismatch { path, .. }
            | Self::KeyNotFound { path, .. }
            | Self::ValueMismatch { path, .. }
            | Self::NotFound { path, .. } => path.prepend(segment),
        }
        self
    }
}

/// Result type for subset checks.
pub type SubsetResult<T> = Result<T, SubsetError>;
