//! Deepset Test - Shared test utilities for deepset.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! deepset-test.workspace = true
//! ```
//!
//! ```rust,ignore
//! use deepset_test::{init_tracing, mapping, sample_payload};
//!
//! #[test]
//! fn test_payload_contains_user() {
//!     init_tracing();
//!     let filter = mapping(serde_json::json!({"user": {"id": 7}}));
//!     assert!(deepset::is_map_subset(&sample_payload(), &filter, Default::default()).is_ok());
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod fixtures;

pub use fixtures::*;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a test-writer `tracing` subscriber once per process.
///
/// Honours `RUST_LOG`; defaults to `deepset=trace` so recursion details
/// show up in failing test output.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("deepset=trace"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
