//! Atomic write operations for `.strings` files.
//!
//! Tables are first written to a temporary sibling file (the target name with
//! `.tmp` appended), flushed, and then renamed over the target. Renames within
//! one filesystem are atomic on POSIX systems, so a crash mid-write leaves the
//! original file intact. A stale temporary file may be left behind in that
//! case; the next successful write replaces it.

use crate::error::Result;
use crate::table::StringsTable;
use crate::writer::render;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

/// Atomically replaces the content of `path` with the rendered table.
///
/// # Errors
///
/// Returns an error if:
/// - The temporary file cannot be created or written
/// - The rename fails (e.g. the target is a directory)
///
/// On failure the temporary file is removed (best effort) and the target is
/// unchanged.
pub async fn write_strings_atomic<P: AsRef<Path>>(path: P, table: &StringsTable) -> Result<()> {
    let path = path.as_ref();
    let temp_path = make_temp_path(path);

    if let Err(e) = write_to_temp_file(&temp_path, &render(table)).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e);
    }

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e.into());
    }

    Ok(())
}

/// Appends `.tmp` to the file name: `en.strings` becomes `en.strings.tmp`.
fn make_temp_path(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

async fn write_to_temp_file(temp_path: &Path, content: &str) -> Result<()> {
    let file = File::create(temp_path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
