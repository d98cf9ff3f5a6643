//! Prelude module - commonly used types for convenient import.
//!
//! Use `use deepset::prelude::*;` to import all essential types.

// Errors
pub use crate::{KeyPath, Segment, SubsetError, SubsetResult};

// Options and value model
pub use crate::{CompareOptions, Kind, Mapping};

// Operations
pub use crate::{is_map_subset, is_slice_contains, is_slice_subset, is_subset};
pub use crate::{merge, merge_any, merge_into};
