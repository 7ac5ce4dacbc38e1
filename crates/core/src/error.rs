//! Error types for Gridkit
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The taxonomy distinguishes the three failure classes the store can hit:
//! backend I/O failure, payload serialization failure, and detected
//! corruption. Corrupt collection *reads* are additionally recovered as empty
//! by the store (see `gridkit-store`); the variant exists for callers that
//! want the strict path.

use std::io;
use thiserror::Error;

/// Result type alias for Gridkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Gridkit
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from a storage backend
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Stored payload is present but not decodable
    #[error("Data corruption in collection {collection:?}: {detail}")]
    Corruption {
        /// Collection key whose payload failed to decode
        collection: String,
        /// Decoder failure message
        detail: String,
    },

    /// Storage backend failure that is not a plain I/O error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Collection key rejected by a backend (e.g. path traversal characters)
    #[error("Invalid collection key: {0}")]
    InvalidKey(String),
}
