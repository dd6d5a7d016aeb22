//! Adds a key to every loaded table.

use crate::store::TableCollection;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Which tables gained the key and which already had it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InsertReport {
    /// Tables the key was added to, with the key itself as value
    pub added: Vec<PathBuf>,
    /// Tables that already contained the key; their value is unchanged
    pub existing: Vec<PathBuf>,
}

/// Ensure `key` exists in every table of `collection`.
///
/// Missing keys get the key itself as a placeholder value. Existing values
/// are never touched, so running this twice with the same key is a no-op the
/// second time.
pub fn insert_key(collection: &mut TableCollection, key: &str) -> InsertReport {
    let mut report = InsertReport::default();

    for table in collection.iter_mut() {
        let path = table.path().to_path_buf();
        if table.entries_mut().ensure_key(key) {
            debug!(path = %path.display(), key, "Added key");
            report.added.push(path);
        } else {
            debug!(path = %path.display(), key, "Key already present");
            report.existing.push(path);
        }
    }

    report
}
