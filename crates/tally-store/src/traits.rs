//! KeyedLog trait: the abstract interface for keyed append logs.
//!
//! Consumers that take a `&dyn KeyedLog<V>` (or a generic `L: KeyedLog<V>`)
//! can be handed the process-wide store in production and a fresh
//! [`SharedStore`] in tests.

use crate::shared::SharedStore;

/// A mapping from string keys to append-only value sequences.
///
/// # Design Notes
///
/// - **Total**: no operation fails. Missing keys read as `None`.
/// - **Ordered**: a key's sequence is in `append` call order.
/// - **Snapshots**: `read` and `items` return owned copies.
pub trait KeyedLog<V>: Send + Sync {
    /// Append a value to the sequence for `key`.
    fn append(&self, key: &str, value: V);

    /// Snapshot of the sequence for `key`.
    fn read(&self, key: &str) -> Option<Vec<V>>;

    /// Remove every key.
    fn clear(&self);

    /// Stored keys, in no particular order.
    fn keys(&self) -> Vec<String>;

    /// Stored `(key, sequence)` pairs, in no particular order.
    fn items(&self) -> Vec<(String, Vec<V>)>;
}

/// Helpers derived from [`KeyedLog`].
pub trait KeyedLogExt<V>: KeyedLog<V> {
    /// Snapshot of the sequence for `key`, or `default` when absent.
    fn read_or(&self, key: &str, default: Vec<V>) -> Vec<V> {
        self.read(key).unwrap_or(default)
    }

    /// Number of values under `key`.
    fn count(&self, key: &str) -> usize {
        self.read(key).map_or(0, |values| values.len())
    }

    /// Most recently appended value under `key`.
    fn last(&self, key: &str) -> Option<V> {
        self.read(key).and_then(|mut values| values.pop())
    }

    fn contains_key(&self, key: &str) -> bool {
        self.read(key).is_some()
    }
}

impl<V, L: KeyedLog<V> + ?Sized> KeyedLogExt<V> for L {}

impl<V: Clone + Send + Sync> KeyedLog<V> for SharedStore<V> {
    fn append(&self, key: &str, value: V) {
        SharedStore::append(self, key, value)
    }

    fn read(&self, key: &str) -> Option<Vec<V>> {
        SharedStore::read(self, key)
    }

    fn clear(&self) {
        SharedStore::clear(self)
    }

    fn keys(&self) -> Vec<String> {
        SharedStore::keys(self)
    }

    fn items(&self) -> Vec<(String, Vec<V>)> {
        SharedStore::items(self)
    }
}
