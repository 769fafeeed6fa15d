//! The process-wide store.
//!
//! Applications either call [`install`] once at startup with an explicit
//! configuration, or let [`get_instance`] create the store with defaults on
//! first use. Either way there is exactly one process-wide store and every
//! handle to it shares the same storage.

use once_cell::sync::OnceCell;
use tally_core::Value;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::shared::SharedStore;

static INSTANCE: OnceCell<SharedStore<Value>> = OnceCell::new();

/// Handle to the process-wide store, created with the default configuration
/// on first call.
pub fn get_instance() -> SharedStore<Value> {
    if let Some(store) = INSTANCE.get() {
        tracing::debug!(store = %store.config().name, "reusing process-wide store");
        return store.clone();
    }
    INSTANCE
        .get_or_init(|| {
            let store = SharedStore::new();
            tracing::info!(store = %store.config().name, "created process-wide store");
            store
        })
        .clone()
}

/// Create the process-wide store with `config`.
///
/// Fails with [`StoreError::AlreadyInitialized`] if the store already exists,
/// whether from an earlier `install` or from a [`get_instance`] call.
pub fn install(config: StoreConfig) -> Result<SharedStore<Value>> {
    let mut created = false;
    let store = INSTANCE.get_or_init(|| {
        created = true;
        tracing::info!(store = %config.name, "installed process-wide store");
        SharedStore::with_config(config)
    });

    if created {
        Ok(store.clone())
    } else {
        Err(StoreError::AlreadyInitialized {
            name: store.config().name.clone(),
        })
    }
}

/// Whether the process-wide store has been created yet.
pub fn is_initialized() -> bool {
    INSTANCE.get().is_some()
}
