//! In-memory state for one insert operation.
//!
//! A [`TableCollection`] maps each discovered file to its parsed
//! [`LocalizationTable`]. It is built from scratch for every insert, mutated
//! by the inserter, consumed by the writer, and then dropped. Every file gets
//! its own table; loading one file never disturbs the tables already loaded.

use lstool_strings::{StringsTable, read_strings_file};
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A parsed `.strings` file together with the path it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationTable {
    path: PathBuf,
    entries: StringsTable,
}

impl LocalizationTable {
    /// Create a table for `path` holding `entries`.
    pub fn new(path: impl Into<PathBuf>, entries: StringsTable) -> Self {
        Self {
            path: path.into(),
            entries,
        }
    }

    /// The file this table was read from and will be written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The table's entries.
    pub fn entries(&self) -> &StringsTable {
        &self.entries
    }

    /// Mutable access to the table's entries.
    pub fn entries_mut(&mut self) -> &mut StringsTable {
        &mut self.entries
    }
}

/// A file that was discovered but could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Path of the unreadable file
    pub path: PathBuf,
    /// Why loading failed
    pub reason: String,
}

/// All tables of one operation, keyed by file path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCollection {
    tables: BTreeMap<PathBuf, LocalizationTable>,
}

impl TableCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every file in `paths` into a fresh collection.
    ///
    /// Files that cannot be read or decoded are left out of the collection
    /// and returned as [`SkippedFile`]s; they are never rewritten. Lines that
    /// do not parse are dropped from their table.
    ///
    /// Per-file progress is a `debug` log line, not stdout output: stdout
    /// carries only the per-key report, so `--json` output stays parseable.
    pub async fn load(paths: &[PathBuf]) -> (Self, Vec<SkippedFile>) {
        let mut collection = Self::new();
        let mut skipped = Vec::new();

        for path in paths {
            debug!(path = %path.display(), "Parsing table");
            match read_strings_file(path).await {
                Ok(parsed) => {
                    for warning in &parsed.warnings {
                        debug!(path = %path.display(), %warning, "Ignored line");
                    }
                    collection.insert(LocalizationTable::new(path.clone(), parsed.table));
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable table");
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        (collection, skipped)
    }

    /// Add a table, returning the one it replaced for the same path.
    pub fn insert(&mut self, table: LocalizationTable) -> Option<LocalizationTable> {
        self.tables.insert(table.path.clone(), table)
    }

    /// Look up the table for `path`.
    pub fn get(&self, path: &Path) -> Option<&LocalizationTable> {
        self.tables.get(path)
    }

    /// Look up the table for `path` mutably.
    pub fn get_mut(&mut self, path: &Path) -> Option<&mut LocalizationTable> {
        self.tables.get_mut(path)
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the collection holds no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Iterate over the tables in path order.
    pub fn iter(&self) -> btree_map::Values<'_, PathBuf, LocalizationTable> {
        self.tables.values()
    }

    /// Iterate mutably over the tables in path order.
    pub fn iter_mut(&mut self) -> btree_map::ValuesMut<'_, PathBuf, LocalizationTable> {
        self.tables.values_mut()
    }
}

impl<'a> IntoIterator for &'a TableCollection {
    type Item = &'a LocalizationTable;
    type IntoIter = btree_map::Values<'a, PathBuf, LocalizationTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut TableCollection {
    type Item = &'a mut LocalizationTable;
    type IntoIter = btree_map::ValuesMut<'a, PathBuf, LocalizationTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn table(path: &str, entries: &[(&str, &str)]) -> LocalizationTable {
        LocalizationTable::new(path, entries.iter().copied().collect())
    }

    #[test]
    fn test_insert_and_get() {
        let mut collection = TableCollection::new();
        assert!(collection.is_empty());

        collection.insert(table("en.strings", &[("a", "1")]));

        assert_eq!(collection.len(), 1);
        let found = collection.get(Path::new("en.strings")).unwrap();
        assert_eq!(found.entries().get("a"), Some("1"));
        assert!(collection.get(Path::new("de.strings")).is_none());
    }

    #[test]
    fn test_insert_same_path_replaces() {
        let mut collection = TableCollection::new();
        collection.insert(table("en.strings", &[("a", "1")]));

        let previous = collection.insert(table("en.strings", &[("b", "2")]));

        assert_eq!(previous.unwrap().entries().get("a"), Some("1"));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_iteration_is_path_ordered() {
        let mut collection = TableCollection::new();
        collection.insert(table("z.strings", &[]));
        collection.insert(table("a.strings", &[]));
        collection.insert(table("m/b.strings", &[]));

        let paths: Vec<&Path> = collection.iter().map(LocalizationTable::path).collect();
        assert_eq!(
            paths,
            vec![
                Path::new("a.strings"),
                Path::new("m/b.strings"),
                Path::new("z.strings")
            ]
        );
    }

    #[test]
    fn test_get_mut_allows_editing() {
        let mut collection = TableCollection::new();
        collection.insert(table("en.strings", &[]));

        collection
            .get_mut(Path::new("en.strings"))
            .unwrap()
            .entries_mut()
            .insert("k", "v");

        assert_eq!(
            collection.get(Path::new("en.strings")).unwrap().entries().get("k"),
            Some("v")
        );
    }

    #[tokio::test]
    async fn test_load_keeps_every_file() {
        let temp = TempDir::new().unwrap();
        let en = temp.path().join("en.strings");
        let de = temp.path().join("de.strings");
        std::fs::write(&en, "\"hello\" = \"Hello\";\n").unwrap();
        std::fs::write(&de, "\"hello\" = \"Hallo\";\n").unwrap();

        let (collection, skipped) = TableCollection::load(&[en.clone(), de.clone()]).await;

        assert!(skipped.is_empty());
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(&en).unwrap().entries().get("hello"), Some("Hello"));
        assert_eq!(collection.get(&de).unwrap().entries().get("hello"), Some("Hallo"));
    }

    #[tokio::test]
    async fn test_load_skips_unreadable_files() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.strings");
        let missing = temp.path().join("missing.strings");
        let binary = temp.path().join("binary.strings");
        std::fs::write(&good, "\"k\" = \"v\";\n").unwrap();
        std::fs::write(&binary, [0xC3, 0x28, 0xFF]).unwrap();

        let (collection, skipped) =
            TableCollection::load(&[missing.clone(), good.clone(), binary.clone()]).await;

        assert_eq!(collection.len(), 1);
        assert!(collection.get(&good).is_some());
        let skipped_paths: Vec<&PathBuf> = skipped.iter().map(|s| &s.path).collect();
        assert_eq!(skipped_paths, vec![&missing, &binary]);
        assert!(skipped[1].reason.contains("encoding"));
    }

    #[tokio::test]
    async fn test_load_drops_malformed_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("en.strings");
        std::fs::write(&path, "\"broken = \"x\";\n\"ok\" = \"yes\";\n").unwrap();

        let (collection, _) = TableCollection::load(std::slice::from_ref(&path)).await;

        let entries = collection.get(&path).unwrap().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("ok"), Some("yes"));
    }
}
