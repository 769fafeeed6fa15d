//! # Tally Testkit
//!
//! Testing utilities for Tally.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Generators**: Proptest strategies for values, keys, and append scripts
//! - **Fixtures**: Helper structs for setting up isolated stores
//!
//! ## Property Testing
//!
//! Replay a generated script against a store and compare with the model:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tally_testkit::generators::{append_ops, apply, expected_contents};
//!
//! proptest! {
//!     #[test]
//!     fn store_matches_model(ops in append_ops(64)) {
//!         let store = tally_store::SharedStore::new();
//!         apply(&store, &ops);
//!         prop_assert_eq!(store.snapshot().into_inner(), expected_contents(&ops));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use tally_testkit::fixtures::{sample_config, TestFixture};
//!
//! let fixture = TestFixture::new();
//! fixture.store.append("configuration.key", sample_config());
//! assert_eq!(fixture.store.count("configuration.key"), 1);
//! ```
//!
//! Fixtures never touch the process-wide store, so tests using them can run
//! in parallel.

pub mod fixtures;
pub mod generators;

pub use fixtures::{sample_config, TestFixture};
pub use generators::{append_ops, apply, expected_contents, AppendOp};
