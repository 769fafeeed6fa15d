//! Point-in-time copies of a whole store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An owned copy of every key and its sequence, sorted by key.
///
/// Taken under a single lock acquisition, so it is internally consistent.
/// It shares nothing with the live store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreSnapshot<V> {
    entries: BTreeMap<String, Vec<V>>,
}

impl<V> StoreSnapshot<V> {
    pub(crate) fn new(entries: BTreeMap<String, Vec<V>>) -> Self {
        Self { entries }
    }

    /// The sequence captured for `key`.
    pub fn get(&self, key: &str) -> Option<&[V]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Captured keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Captured `(key, sequence)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[V])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    /// Number of keys captured.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of values across all keys.
    pub fn value_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<V>> {
        self.entries
    }
}

impl<V> IntoIterator for StoreSnapshot<V> {
    type Item = (String, Vec<V>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
