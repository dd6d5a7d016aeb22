//! Error types for lstool-strings operations.

use std::io;
use thiserror::Error;

/// The error type for lstool-strings operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// File content could not be decoded as text.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// A key cannot be stored as a `.strings` row.
    #[error("Invalid key {key:?}: {reason}")]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// What makes it unrepresentable.
        reason: &'static str,
    },
}

/// A specialized Result type for lstool-strings operations.
pub type Result<T> = std::result::Result<T, Error>;
