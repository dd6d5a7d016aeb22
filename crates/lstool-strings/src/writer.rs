//! Rendering and writing of `.strings` tables.
//!
//! Every entry is written as `"<key>" = "<value>";` followed by a blank line,
//! in the order given by [`StringsTable::sorted_entries`]. Output is UTF-8
//! with no header or trailing metadata.

use crate::atomic::write_strings_atomic;
use crate::error::Result;
use crate::table::StringsTable;
use std::fmt::Write;
use std::path::Path;

/// How a table replaces the previous content of its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write a temporary sibling file, then rename it over the target.
    #[default]
    Atomic,
    /// Truncate and overwrite the target directly.
    InPlace,
}

/// Renders a table to `.strings` text.
///
/// # Examples
///
/// ```
/// use lstool_strings::{StringsTable, render};
///
/// let table: StringsTable = [("hello", "world"), ("greeting", "greeting")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(
///     render(&table),
///     "\"greeting\" = \"greeting\";\n\n\"hello\" = \"world\";\n\n"
/// );
/// ```
#[must_use]
pub fn render(table: &StringsTable) -> String {
    let mut output = String::new();
    for (key, value) in table.sorted_entries() {
        // Writing to a String cannot fail.
        let _ = write!(output, "\"{}\" = \"{}\";\n\n", key, value);
    }
    output
}

/// Writes a table to `path` using the given mode.
///
/// # Errors
///
/// Returns an error if any file system operation fails. With
/// [`WriteMode::Atomic`] the original file is left untouched on failure.
pub async fn write_strings<P: AsRef<Path>>(
    path: P,
    table: &StringsTable,
    mode: WriteMode,
) -> Result<()> {
    match mode {
        WriteMode::Atomic => write_strings_atomic(path, table).await,
        WriteMode::InPlace => write_strings_in_place(path, table).await,
    }
}

/// Overwrites `path` with the rendered table.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub async fn write_strings_in_place<P: AsRef<Path>>(path: P, table: &StringsTable) -> Result<()> {
    tokio::fs::write(path, render(table)).await?;
    Ok(())
}
