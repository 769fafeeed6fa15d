//! The shared keyed append log.
//!
//! A [`SharedStore`] maps string keys to ordered, append-only sequences.
//! Handles are cheap to clone and every clone sees the same storage.
//! Thread-safe via RwLock; the lock is held for one map access at a time.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tally_core::Value;

use crate::config::StoreConfig;
use crate::snapshot::StoreSnapshot;

type Storage<V> = HashMap<String, Vec<V>>;

/// Shared keyed append log.
///
/// Every key present maps to a non-empty sequence whose order is the call
/// order of `append` for that key. Reads return owned snapshots, never a view
/// into live storage, so a returned sequence is unaffected by later appends
/// or by `clear`.
pub struct SharedStore<V = Value> {
    inner: Arc<Inner<V>>,
}

struct Inner<V> {
    config: StoreConfig,
    storage: RwLock<Storage<V>>,
}

impl<V> SharedStore<V> {
    /// Create an independent, empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an independent, empty store.
    pub fn with_config(config: StoreConfig) -> Self {
        let storage = HashMap::with_capacity(config.initial_capacity);
        Self {
            inner: Arc::new(Inner {
                config,
                storage: RwLock::new(storage),
            }),
        }
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Whether two handles share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Append `value` to the end of the sequence for `key`, creating the
    /// sequence on first use.
    ///
    /// Log events are emitted after the lock is released.
    pub fn append(&self, key: &str, value: impl Into<V>) {
        let value = value.into();
        let len = {
            let mut storage = self.write();
            let len = match storage.get_mut(key) {
                Some(values) => {
                    values.push(value);
                    values.len()
                }
                None => {
                    storage.insert(key.to_owned(), vec![value]);
                    1
                }
            };
            len
        };
        tracing::trace!(store = %self.inner.config.name, key, len, "appended value");
    }

    /// Append every value from `values` under one lock acquisition.
    ///
    /// An empty iterator leaves the store untouched; it never creates an
    /// empty sequence.
    pub fn extend<I>(&self, key: &str, values: I)
    where
        I: IntoIterator,
        I::Item: Into<V>,
    {
        let mut batch: Vec<V> = values.into_iter().map(Into::into).collect();
        if batch.is_empty() {
            return;
        }
        let added = batch.len();
        let len = {
            let mut storage = self.write();
            let len = match storage.get_mut(key) {
                Some(existing) => {
                    existing.append(&mut batch);
                    existing.len()
                }
                None => {
                    storage.insert(key.to_owned(), batch);
                    added
                }
            };
            len
        };
        tracing::trace!(store = %self.inner.config.name, key, added, len, "extended sequence");
    }

    /// Remove every key. Snapshots handed out earlier stay valid.
    pub fn clear(&self) {
        let dropped = {
            let mut storage = self.write();
            let dropped = storage.len();
            storage.clear();
            dropped
        };
        tracing::debug!(store = %self.inner.config.name, dropped, "cleared store");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inspection (no cloning of values)
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.read_guard().contains_key(key)
    }

    /// Number of values stored under `key`; 0 when absent.
    pub fn count(&self, key: &str) -> usize {
        self.read_guard().get(key).map_or(0, Vec::len)
    }

    /// Stored keys. Order is unspecified.
    pub fn keys(&self) -> Vec<String> {
        self.read_guard().keys().cloned().collect()
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, Storage<V>> {
        self.inner.storage.read().unwrap_or_else(|poisoned| {
            tracing::warn!(store = %self.inner.config.name, "recovered poisoned store lock");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Storage<V>> {
        self.inner.storage.write().unwrap_or_else(|poisoned| {
            tracing::warn!(store = %self.inner.config.name, "recovered poisoned store lock");
            poisoned.into_inner()
        })
    }
}

impl<V: Clone> SharedStore<V> {
    /// Snapshot of the sequence under `key`, or `None` if the key is absent.
    pub fn read(&self, key: &str) -> Option<Vec<V>> {
        self.read_guard().get(key).cloned()
    }

    /// Snapshot of the sequence under `key`, or `default` if the key is absent.
    pub fn read_or(&self, key: &str, default: Vec<V>) -> Vec<V> {
        self.read(key).unwrap_or(default)
    }

    /// The most recently appended value under `key`.
    pub fn last(&self, key: &str) -> Option<V> {
        self.read_guard()
            .get(key)
            .and_then(|values| values.last().cloned())
    }

    /// Every `(key, sequence)` pair, consistent with [`keys`](Self::keys) at
    /// the same instant. Order is unspecified.
    pub fn items(&self) -> Vec<(String, Vec<V>)> {
        self.read_guard()
            .iter()
            .map(|(k, values)| (k.clone(), values.clone()))
            .collect()
    }

    /// Consistent copy of the whole store, sorted by key.
    pub fn snapshot(&self) -> StoreSnapshot<V> {
        let entries: BTreeMap<String, Vec<V>> = self
            .read_guard()
            .iter()
            .map(|(k, values)| (k.clone(), values.clone()))
            .collect();
        StoreSnapshot::new(entries)
    }
}

impl SharedStore<Value> {
    /// The process-wide store. Same as [`get_instance`](crate::get_instance).
    pub fn global() -> Self {
        crate::global::get_instance()
    }

    /// Dynamic read: the sequence as a [`Value::List`], or `default` when the
    /// key is absent.
    pub fn read_value(&self, key: &str, default: Value) -> Value {
        self.read(key).map_or(default, Value::List)
    }
}

impl<V> Clone for SharedStore<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for SharedStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for SharedStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedStore")
            .field("name", &self.inner.config.name)
            .field("keys", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::sync::{mpsc, Mutex};
    use std::thread;
    use std::time::Duration;
    use tracing::{span, Event, Metadata, Subscriber};

    fn store() -> SharedStore {
        SharedStore::new()
    }

    #[test]
    fn test_append_accumulates_in_order() {
        let store = store();
        store.append("numbers", 1);
        store.append("numbers", 2);

        assert_eq!(store.read("numbers"), Some(vec![Value::Int(1), Value::Int(2)]));
        assert_eq!(store.count("numbers"), 2);
        assert_eq!(store.last("numbers"), Some(Value::Int(2)));
    }

    #[test]
    fn test_stores_structured_value() {
        let store = store();
        let sample = Value::map([("ip", Value::from("127.0.0.1")), ("port", Value::from(8080))]);
        store.append("config", sample.clone());

        let retrieved = store.read("config").unwrap();
        assert_eq!(retrieved.len(), 1);
        assert_eq!(retrieved[0], sample);
    }

    #[test]
    fn test_missing_key_default() {
        let store = store();
        assert_eq!(store.read("missing"), None);
        assert_eq!(store.read_or("missing", vec![Value::Null]), vec![Value::Null]);

        let default = Value::map([("x", true)]);
        assert_eq!(store.read_value("missing", default.clone()), default);
        assert_eq!(store.count("missing"), 0);
        assert_eq!(store.last("missing"), None);
    }

    #[test]
    fn test_read_value_wraps_sequence_in_list() {
        let store = store();
        store.append("k", "a");
        store.append("k", "b");
        assert_eq!(store.read_value("k", Value::Null), Value::list(["a", "b"]));
    }

    #[test]
    fn test_empty_key_is_valid() {
        let store = store();
        store.append("", 0);
        assert!(store.contains_key(""));
        assert_eq!(store.keys(), vec![String::new()]);
    }

    #[test]
    fn test_clear_empties_all_keys() {
        let store = store();
        store.append("k1", "v1");
        store.append("k2", "v2");
        store.clear();

        assert!(store.keys().is_empty());
        assert!(store.is_empty());
        assert_eq!(store.read("k1"), None);
        assert_eq!(store.read("k2"), None);

        // Still usable afterwards.
        store.append("k1", "again");
        assert_eq!(store.read("k1"), Some(vec![Value::from("again")]));
    }

    #[test]
    fn test_keys_and_items() {
        let store = store();
        store.append("a", 1);
        store.append("b", 2);

        let keys: HashSet<String> = store.keys().into_iter().collect();
        assert_eq!(keys, HashSet::from(["a".to_string(), "b".to_string()]));

        let mut items = store.items();
        items.sort_by(|x, y| x.0.cmp(&y.0));
        assert_eq!(
            items,
            vec![
                ("a".to_string(), vec![Value::Int(1)]),
                ("b".to_string(), vec![Value::Int(2)]),
            ]
        );
    }

    #[test]
    fn test_read_returns_snapshot() {
        let store = store();
        store.append("k", 1);
        let before = store.read("k").unwrap();

        store.append("k", 2);
        assert_eq!(before, vec![Value::Int(1)]);

        store.clear();
        assert_eq!(before, vec![Value::Int(1)]);
    }

    #[test]
    fn test_clones_share_storage() {
        let a = store();
        let b = a.clone();
        b.append("shared", true);

        assert!(a.ptr_eq(&b));
        assert_eq!(a.read("shared"), Some(vec![Value::Bool(true)]));
        assert!(!a.ptr_eq(&store()));
    }

    #[test]
    fn test_extend_preserves_order_and_skips_empty() {
        let store = store();
        store.append("k", 0);
        store.extend("k", [1, 2, 3]);
        assert_eq!(store.read("k"), Some((0..4).map(Value::Int).collect()));

        store.extend("empty", Vec::<i64>::new());
        assert!(!store.contains_key("empty"));
    }

    #[test]
    fn test_snapshot_is_sorted_and_detached() {
        let store = store();
        store.append("b", 2);
        store.append("a", 1);
        store.append("a", 3);

        let snap = store.snapshot();
        store.clear();

        assert_eq!(snap.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(snap.get("a"), Some(&[Value::Int(1), Value::Int(3)][..]));
        assert_eq!(snap.value_count(), 3);

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json, serde_json::json!({"a": [1, 3], "b": [2]}));
    }

    #[test]
    fn test_typed_store() {
        #[derive(Debug, Clone, PartialEq)]
        struct Reading(u32);

        let store: SharedStore<Reading> = SharedStore::new();
        store.append("sensor", Reading(1));
        store.append("sensor", Reading(2));
        assert_eq!(store.read("sensor"), Some(vec![Reading(1), Reading(2)]));
    }

    #[test]
    fn test_config_capacity_and_name() {
        let config = StoreConfig::named("demo").initial_capacity(64);
        let store: SharedStore = SharedStore::with_config(config);
        assert_eq!(store.config().name, "demo");
        assert_eq!(store.config().initial_capacity, 64);
        assert!(format!("{:?}", store).contains("demo"));
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        const THREADS: i64 = 8;
        const PER_THREAD: i64 = 500;

        let store = store();
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let store = store.clone();
                thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        store.append("hits", Value::list([t, i]));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let values = store.read("hits").unwrap();
        assert_eq!(values.len() as i64, THREADS * PER_THREAD);

        // Each thread's own values appear in its call order.
        for t in 0..THREADS {
            let seen: Vec<i64> = values
                .iter()
                .filter_map(|v| {
                    let pair = v.as_list()?;
                    (pair[0] == Value::Int(t)).then(|| pair[1].as_i64()).flatten()
                })
                .collect();
            assert_eq!(seen, (0..PER_THREAD).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_survives_poisoned_lock() {
        let store = store();
        store.append("k", 1);

        let poisoner = store.clone();
        let result = thread::spawn(move || {
            let _guard = poisoner.inner.storage.write().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(result.is_err());

        store.append("k", 2);
        assert_eq!(store.read("k"), Some(vec![Value::Int(1), Value::Int(2)]));
    }

    /// Subscriber that reads the store it is observing on every event.
    struct ReadsStoreOnEvent {
        store: SharedStore,
        lens: Arc<Mutex<Vec<usize>>>,
    }

    impl Subscriber for ReadsStoreOnEvent {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

        fn event(&self, _: &Event<'_>) {
            let len = self.store.len();
            self.lens.lock().unwrap().push(len);
        }

        fn enter(&self, _: &span::Id) {}

        fn exit(&self, _: &span::Id) {}
    }

    #[test]
    fn test_log_events_fire_outside_the_lock() {
        let store = store();
        let lens = Arc::new(Mutex::new(Vec::new()));
        let subscriber = ReadsStoreOnEvent {
            store: store.clone(),
            lens: Arc::clone(&lens),
        };

        let (done_tx, done_rx) = mpsc::channel();
        thread::spawn(move || {
            tracing::subscriber::with_default(subscriber, || {
                store.append("k", 1);
                store.extend("k", [2, 3]);
                store.append("other", 4);
                store.clear();
            });
            let _ = done_tx.send(());
        });

        done_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("store operation blocked while its log event was handled");
        assert_eq!(*lens.lock().unwrap(), vec![1, 1, 2, 0]);
    }

    proptest! {
        #[test]
        fn test_read_equals_appended_sequence(values in prop::collection::vec(any::<i64>(), 1..50)) {
            let store = store();
            for v in &values {
                store.append("k", *v);
            }
            let expected: Vec<Value> = values.iter().copied().map(Value::Int).collect();
            prop_assert_eq!(store.read("k"), Some(expected));
        }

        #[test]
        fn test_items_match_keys(keys in prop::collection::vec("[a-z]{0,4}", 0..20)) {
            let store = store();
            for (i, k) in keys.iter().enumerate() {
                store.append(k, i as i64);
            }

            let expected: HashSet<String> = keys.iter().cloned().collect();
            let listed: HashSet<String> = store.keys().into_iter().collect();
            let from_items: HashSet<String> = store.items().into_iter().map(|(k, _)| k).collect();
            prop_assert_eq!(&listed, &expected);
            prop_assert_eq!(&from_items, &expected);

            for (_, values) in store.items() {
                prop_assert!(!values.is_empty());
            }
        }
    }
}
