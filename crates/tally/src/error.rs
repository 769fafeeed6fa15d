//! Error types for Tally.

use tally_core::ValueError;
use tally_store::StoreError;
use thiserror::Error;

/// Errors that can occur when working with stored data.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Store setup error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Stored value has the wrong shape.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Nothing has been appended under the key.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// A map value lacks the requested field.
    #[error("missing field: {0:?}")]
    MissingField(String),
}

/// Result type for Tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;
