//! Error types for Tally Core.

use thiserror::Error;

/// Errors raised when extracting concrete data from a [`Value`](crate::Value).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type for value conversions.
pub type Result<T> = std::result::Result<T, ValueError>;
