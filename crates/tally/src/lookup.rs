//! Typed access to stored values.
//!
//! The store itself is total and schema-free. These helpers are for callers
//! that expect a particular shape and want a [`TallyError`] when it is absent.

use tally_core::{Value, ValueError};
use tally_store::SharedStore;

use crate::error::{Result, TallyError};

/// The first value ever appended under `key`.
pub fn first(store: &SharedStore, key: &str) -> Result<Value> {
    store
        .read(key)
        .and_then(|values| values.into_iter().next())
        .ok_or_else(|| TallyError::KeyNotFound(key.to_string()))
}

/// The most recent value appended under `key`.
pub fn latest(store: &SharedStore, key: &str) -> Result<Value> {
    store
        .last(key)
        .ok_or_else(|| TallyError::KeyNotFound(key.to_string()))
}

/// Field `name` of a map value.
pub fn field<'a>(value: &'a Value, name: &str) -> Result<&'a Value> {
    value
        .get(name)
        .ok_or_else(|| TallyError::MissingField(name.to_string()))
}

/// Field `name` of a map value, converted to `T`.
pub fn field_as<T>(value: &Value, name: &str) -> Result<T>
where
    T: TryFrom<Value, Error = ValueError>,
{
    Ok(T::try_from(field(value, name)?.clone())?)
}
