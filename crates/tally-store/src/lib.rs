//! # Tally Store
//!
//! A process-wide, thread-safe keyed append log. Each string key maps to an
//! ordered sequence of values that only ever grows, until the whole store is
//! cleared.
//!
//! ## Key Types
//!
//! - [`SharedStore`] - Cheaply clonable handle to one keyed append log
//! - [`get_instance`] / [`install`] - Access to the single process-wide store
//! - [`KeyedLog`] - Trait seam for consumers that should not name the concrete store
//! - [`StoreSnapshot`] - Consistent, detached copy of a whole store
//! - [`StoreConfig`] - Construction options
//!
//! ## Usage
//!
//! ```rust
//! use tally_store::{get_instance, Value};
//!
//! let store = get_instance();
//! store.append("numbers", 1);
//! store.append("numbers", 2);
//!
//! // Another handle sees the same storage.
//! let other = get_instance();
//! assert_eq!(other.read("numbers"), Some(vec![Value::Int(1), Value::Int(2)]));
//! assert_eq!(other.read("missing"), None);
//! ```
//!
//! ## Design Notes
//!
//! - **Append-only**: a key's sequence only grows; `clear` drops every key at once
//! - **Snapshot reads**: reads return owned copies, never views into live storage
//! - **Total**: storage operations cannot fail, a poisoned lock is recovered
//! - **Short critical sections**: the lock covers one map access, never caller code

pub mod config;
pub mod error;
pub mod global;
pub mod shared;
pub mod snapshot;
pub mod traits;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use global::{get_instance, install, is_initialized};
pub use shared::SharedStore;
pub use snapshot::StoreSnapshot;
pub use tally_core::Value;
pub use traits::{KeyedLog, KeyedLogExt};
