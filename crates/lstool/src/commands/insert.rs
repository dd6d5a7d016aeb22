//! Implementation of the `insert` command.
//!
//! One call runs the whole pipeline for a single key: scan the tree, parse
//! every table into a fresh collection, add the key where it is missing, and
//! write every table back. Nothing is carried over between calls.

use crate::config::Config;
use crate::error::Result;
use crate::inserter::insert_key;
use crate::scanner::scan;
use crate::store::{SkippedFile, TableCollection};
use crate::writer::{WriteFailure, write_collection};
use lstool_strings::validate_key;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Result of inserting one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertOutcome {
    /// The key that was inserted
    pub key: String,
    /// Why the key was refused; when set, no file was read or written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
    /// Number of table files found under the root
    pub files_scanned: usize,
    /// Files that could not be read and were left untouched
    pub skipped: Vec<SkippedFile>,
    /// Files that gained the key
    pub added: Vec<PathBuf>,
    /// Files that already had the key
    pub existing: Vec<PathBuf>,
    /// Files rewritten on disk
    pub written: Vec<PathBuf>,
    /// Files whose rewrite failed
    pub failed: Vec<WriteFailure>,
}

impl InsertOutcome {
    fn from_rejection(key: &str, reason: String) -> Self {
        Self {
            key: key.to_string(),
            rejected: Some(reason),
            files_scanned: 0,
            skipped: Vec::new(),
            added: Vec::new(),
            existing: Vec::new(),
            written: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Whether the key was accepted and every discovered file was read and
    /// written.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_none() && self.skipped.is_empty() && self.failed.is_empty()
    }
}

/// Ensure `key` exists in every table under `config.root`.
///
/// # Errors
///
/// Returns an error only if the root itself cannot be scanned. Per-file read
/// and write failures are reported in the returned [`InsertOutcome`], as is a
/// key that cannot be written as a row, which leaves every file untouched.
pub async fn insert(config: &Config, key: &str) -> Result<InsertOutcome> {
    if let Err(e) = validate_key(key) {
        warn!(key, error = %e, "Rejecting key");
        return Ok(InsertOutcome::from_rejection(key, e.to_string()));
    }

    let paths = scan(&config.root, &config.extension)?;
    info!(key, files = paths.len(), root = %config.root.display(), "Scanned tables");

    let (mut collection, skipped) = TableCollection::load(&paths).await;
    let report = insert_key(&mut collection, key);
    info!(
        key,
        added = report.added.len(),
        existing = report.existing.len(),
        "Inserted key"
    );

    let written = write_collection(&collection, config.write_mode).await;
    info!(
        key,
        written = written.written.len(),
        failed = written.failed.len(),
        "Wrote tables"
    );

    Ok(InsertOutcome {
        key: key.to_string(),
        rejected: None,
        files_scanned: paths.len(),
        skipped,
        added: report.added,
        existing: report.existing,
        written: written.written,
        failed: written.failed,
    })
}
