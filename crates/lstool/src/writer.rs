//! Persists every table of a collection back to its file.

use crate::store::TableCollection;
use lstool_strings::{WriteMode, write_strings};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A table that could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteFailure {
    /// Target file
    pub path: PathBuf,
    /// Rendered error message
    pub error: String,
}

/// Outcome of writing a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    /// Files rewritten successfully
    pub written: Vec<PathBuf>,
    /// Files that failed; other files were still written
    pub failed: Vec<WriteFailure>,
}

impl WriteReport {
    /// Whether every table was written.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Write every table in `collection` to its own path.
///
/// Each file is rewritten in full, sorted by key, whether or not its content
/// changed. A failure on one file is logged and recorded; the remaining files
/// are still written.
pub async fn write_collection(collection: &TableCollection, mode: WriteMode) -> WriteReport {
    let mut report = WriteReport::default();

    for table in collection {
        let path = table.path();
        match write_strings(path, table.entries(), mode).await {
            Ok(()) => {
                debug!(path = %path.display(), entries = table.entries().len(), "Wrote table");
                report.written.push(path.to_path_buf());
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to write table");
                report.failed.push(WriteFailure {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LocalizationTable;
    use lstool_strings::StringsTable;
    use rstest::rstest;
    use tempfile::TempDir;

    fn table(path: PathBuf, entries: &[(&str, &str)]) -> LocalizationTable {
        let entries: StringsTable = entries.iter().copied().collect();
        LocalizationTable::new(path, entries)
    }

    #[rstest]
    #[case::atomic(WriteMode::Atomic)]
    #[case::in_place(WriteMode::InPlace)]
    #[tokio::test]
    async fn test_write_collection_writes_sorted_tables(#[case] mode: WriteMode) {
        let temp = TempDir::new().unwrap();
        let en = temp.path().join("en.strings");
        let de = temp.path().join("de.strings");
        let mut collection = TableCollection::new();
        collection.insert(table(en.clone(), &[("zebra", "Zebra"), ("Apple", "Apple")]));
        collection.insert(table(de.clone(), &[("hello", "Hallo")]));

        let report = write_collection(&collection, mode).await;

        assert!(report.is_success());
        assert_eq!(report.written, vec![de.clone(), en.clone()]);
        assert_eq!(
            std::fs::read_to_string(&en).unwrap(),
            "\"Apple\" = \"Apple\";\n\n\"zebra\" = \"Zebra\";\n\n"
        );
        assert_eq!(
            std::fs::read_to_string(&de).unwrap(),
            "\"hello\" = \"Hallo\";\n\n"
        );
    }

    #[tokio::test]
    async fn test_write_collection_continues_after_failure() {
        let temp = TempDir::new().unwrap();
        let blocked = temp.path().join("blocked.strings");
        std::fs::create_dir(&blocked).unwrap();
        let good = temp.path().join("good.strings");

        let mut collection = TableCollection::new();
        collection.insert(table(blocked.clone(), &[("k", "v")]));
        collection.insert(table(good.clone(), &[("k", "v")]));

        let report = write_collection(&collection, WriteMode::Atomic).await;

        assert!(!report.is_success());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].path, blocked);
        assert_eq!(report.written, vec![good.clone()]);
        assert_eq!(std::fs::read_to_string(&good).unwrap(), "\"k\" = \"v\";\n\n");
    }

    #[tokio::test]
    async fn test_write_collection_rewrites_empty_table() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.strings");
        std::fs::write(&path, "/* only a comment */\n").unwrap();

        let mut collection = TableCollection::new();
        collection.insert(table(path.clone(), &[]));

        let report = write_collection(&collection, WriteMode::default()).await;

        assert!(report.is_success());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[tokio::test]
    async fn test_write_empty_collection() {
        let report = write_collection(&TableCollection::new(), WriteMode::Atomic).await;
        assert_eq!(report, WriteReport::default());
    }
}
