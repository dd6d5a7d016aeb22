//! Error types for lstool operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for lstool operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the strings file layer.
    #[error(transparent)]
    Strings(#[from] lstool_strings::Error),

    /// The directory tree could not be scanned at all.
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Fatal problems with the scan root.
///
/// Failures on individual entries below the root are not errors; they are
/// logged and skipped.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root path does not exist.
    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The root path exists but is not a directory.
    #[error("Root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The root directory cannot be enumerated.
    #[error("Cannot read root directory {}: {source}", path.display())]
    Unreadable {
        /// The root that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}

/// A specialized Result type for lstool operations.
pub type Result<T> = std::result::Result<T, Error>;
