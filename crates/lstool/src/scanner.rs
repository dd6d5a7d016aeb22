//! Discovery of localization tables below a root directory.
//!
//! The walk is recursive, does not follow symbolic links, and visits
//! directory entries sorted by file name so repeated scans of an unchanged
//! tree return the same paths in the same order. Entries that cannot be
//! read are logged and skipped; only an unusable root is fatal.

use crate::error::ScanError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Find every regular file under `root` whose extension is `extension`.
///
/// # Errors
///
/// Returns a [`ScanError`] if `root` does not exist, is not a directory,
/// or cannot be listed.
pub fn scan(root: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    check_root(root)?;

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };

        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            debug!(path = %entry.path().display(), "Found table");
            paths.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = paths.len(), "Scan complete");
    Ok(paths)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension() == Some(OsStr::new(extension))
}

fn check_root(root: &Path) -> Result<(), ScanError> {
    let metadata = std::fs::metadata(root).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ScanError::RootNotFound(root.to_path_buf())
        } else {
            ScanError::Unreadable {
                path: root.to_path_buf(),
                source,
            }
        }
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    std::fs::read_dir(root).map_err(|source| ScanError::Unreadable {
        path: root.to_path_buf(),
        source,
    })?;

    Ok(())
}
