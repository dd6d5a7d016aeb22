//! Output formatting for CLI commands.
//!
//! Reports go to stdout in either human-readable text or JSON. Per-file
//! problems in text mode go to stderr so stdout keeps one line per key.

use crate::commands::insert::InsertOutcome;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

/// Usage text printed for a missing or unknown command.
pub const USAGE: &str = "Usage:\n  lstool insert <lstring>";

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Print the usage text to stdout.
pub fn print_usage() -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", USAGE)
}

/// Print a JSON-formatted result for any serializable value
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(handle, "{}", json)
}

/// Print the announcement that precedes work on `key`.
pub fn print_inserting(key: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_inserting(&mut handle, key)
}

/// Print a rejected key and the skipped and failed files of an outcome to stderr.
pub fn print_problems(outcome: &InsertOutcome) -> io::Result<()> {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    write_problems(&mut handle, outcome)
}

fn write_inserting<W: Write>(w: &mut W, key: &str) -> io::Result<()> {
    writeln!(w, "Inserting {} ...", key)
}

fn write_problems<W: Write>(w: &mut W, outcome: &InsertOutcome) -> io::Result<()> {
    if outcome.is_clean() {
        return Ok(());
    }
    if let Some(reason) = &outcome.rejected {
        writeln!(w, "{} {}; no files changed", "error:".red().bold(), reason)?;
    }
    for skipped in &outcome.skipped {
        writeln!(
            w,
            "{} skipped {}: {}",
            "warning:".yellow().bold(),
            skipped.path.display(),
            skipped.reason
        )?;
    }
    for failure in &outcome.failed {
        writeln!(
            w,
            "{} failed to write {}: {}",
            "error:".red().bold(),
            failure.path.display(),
            failure.error
        )?;
    }
    Ok(())
}
