//! Value model for optchain.
//!
//! This crate defines the tree that path resolution walks:
//! - [`Value`] — tagged union of absence, scalars, lists, records and callables
//! - [`Record`] — field name to value mapping
//! - [`Callable`] — a shared zero-argument function producing a [`Value`]
//! - [`ValueKind`] — the variant tag, used for diagnostics
//!
//! Path syntax and resolution live in `optchain-access`; nothing here knows
//! about paths.

mod callable;
mod value;

pub use callable::Callable;
pub use value::{Record, Value, ValueKind};

/// Re-exported so callers can build numbers without depending on serde_json.
pub use serde_json::Number;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in value operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
