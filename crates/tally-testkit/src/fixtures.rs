//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use tally_core::Value;
use tally_store::{SharedStore, StoreConfig};

/// A test fixture owning an isolated store.
pub struct TestFixture {
    pub store: SharedStore,
}

impl TestFixture {
    /// Create a fixture with an empty, default-configured store.
    pub fn new() -> Self {
        Self {
            store: SharedStore::new(),
        }
    }

    /// Create a fixture whose store carries `name` in its log events.
    pub fn named(name: &str) -> Self {
        Self {
            store: SharedStore::with_config(StoreConfig::named(name)),
        }
    }

    /// Append each `(key, value)` pair in order.
    pub fn populate<K, V>(&self, entries: impl IntoIterator<Item = (K, V)>) -> &Self
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (key, value) in entries {
            self.store.append(key.as_ref(), value);
        }
        self
    }

    /// `count` handles that all share the fixture's storage.
    pub fn handles(&self, count: usize) -> Vec<SharedStore> {
        (0..count).map(|_| self.store.clone()).collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The configuration record the demo stores.
pub fn sample_config() -> Value {
    Value::map([
        ("config", "default"),
        ("ip", "192.168.1.1"),
        ("port", "5555"),
    ])
}
