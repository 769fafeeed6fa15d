//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur while setting up the process-wide store.
///
/// Storage operations themselves are total and never return these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `install` was called after the process-wide store already existed.
    #[error("process-wide store is already initialized (name: {name})")]
    AlreadyInitialized { name: String },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
