//! Error types for the Shelf engine.

use crate::EntryId;
use thiserror::Error;

/// All possible errors from the Shelf engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Validation errors
    #[error("entry value must not be empty")]
    EmptyValue,

    // Lookup errors
    #[error("entry not found: {0}")]
    EntryNotFound(EntryId),

    // ID errors
    #[error("no entry ids left above the largest stored id")]
    IdsExhausted,

    // Persistence errors
    #[error("invalid blob: {0}")]
    InvalidBlob(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
