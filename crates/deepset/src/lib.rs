//! Deepset - structural subset checks and deep merges for nested values.
//!
//! Operates on [`serde_json::Value`] trees produced by any serde decoder
//! (JSON, TOML, YAML). This crate provides:
//! - Subset checks with configurable key case-sensitivity and weak typing
//! - Deep merge of mappings with source precedence
//! - Exact-key path lookup into nested mappings
//!
//! # Example
//!
//! ```rust
//! use deepset::{CompareOptions, is_subset, merge_any};
//! use serde_json::json;
//!
//! let payload = json!({"user": {"id": 7, "Name": "Ada"}, "tags": ["a", "b"]});
//! let filter = json!({"user": {"id": "7", "name": "ada"}, "tags": ["b"]});
//!
//! let opts = CompareOptions::new().with_case_insensitive_keys(true);
//! assert!(is_subset(&payload, &filter, opts).is_ok());
//!
//! let merged = merge_any(json!({"tags": ["z"]}), payload);
//! assert_eq!(merged["tags"], json!(["z"]));
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod merge;
pub mod path;

mod error;
mod options;
mod subset;
mod value;

pub use error::{KeyPath, Segment, SubsetError, SubsetResult};
pub use merge::{merge, merge_any, merge_into, merge_tracking};
pub use options::CompareOptions;
pub use subset::{
    contains, is_map_subset, is_slice_contains, is_slice_subset, is_subset, values_equal,
};
pub use value::{Kind, Mapping, eq_fold, render_scalar};
