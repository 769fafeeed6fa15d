//! # Tally
//!
//! A process-wide, shared key-value accumulator.
//!
//! ## Overview
//!
//! One storage container is reachable from anywhere in the process. Each
//! string key maps to an append-only ordered sequence of values:
//!
//! - **Append**: pushes a value onto a key's sequence, creating it on first use
//! - **Read**: returns a snapshot of a key's whole history, or a default
//! - **Enumerate**: lists keys, or key/sequence pairs
//! - **Clear**: drops every key; the store stays usable
//!
//! ## Usage
//!
//! ```rust
//! use tally::{get_instance, Value};
//!
//! let store = get_instance();
//! store.append("configuration.key", Value::map([("ip", "192.168.1.1")]));
//!
//! let config = tally::lookup::first(&get_instance(), "configuration.key").unwrap();
//! assert_eq!(config.get("ip").and_then(Value::as_str), Some("192.168.1.1"));
//! ```
//!
//! Code that should not depend on the process-wide store can take a
//! [`KeyedLog`] and be handed an independent [`SharedStore`] in tests.
//!
//! ## Re-exports
//!
//! - `tally::core` - The [`Value`] payload model
//! - `tally::store` - The store, its configuration, and the [`KeyedLog`] trait

pub mod error;
pub mod lookup;

// Re-export component crates
pub use tally_core as core;
pub use tally_store as store;

// Re-export main types for convenience
pub use error::{Result, TallyError};
pub use tally_core::{Value, ValueError};
pub use tally_store::{
    get_instance, install, KeyedLog, KeyedLogExt, SharedStore, StoreConfig, StoreError,
    StoreSnapshot,
};
