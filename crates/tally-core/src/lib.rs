//! # Tally Core
//!
//! The payload model for Tally keyed logs.
//!
//! This crate contains no storage and no synchronization. It defines the
//! [`Value`] type that the process-wide store accumulates by default, plus the
//! conversions applications use to get typed data back out.
//!
//! ## Key Types
//!
//! - [`Value`] - Closed tagged union of the payload shapes an application stores
//! - [`ValueError`] - Failure to convert a [`Value`] into a concrete Rust type
//!
//! ## Serialization
//!
//! `Value` serializes untagged, so a map of strings renders as a plain JSON
//! object. See [`value`] for the variant ordering used when deserializing.

pub mod error;
pub mod value;

pub use error::{Result, ValueError};
pub use value::Value;
