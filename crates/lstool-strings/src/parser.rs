//! Parsing of `.strings` file content.
//!
//! Content is split on every Unicode line terminator, each line is trimmed,
//! and the first `"<key>" = "<value>";` match on the line becomes an entry.
//! Keys and values are the shortest runs of characters up to the next `"`
//! that still let the whole row match. Blank lines are ignored; any other
//! line without a match is dropped and reported as a [`Warning`].

use crate::error::{Error, Result};
use crate::table::StringsTable;
use crate::warning::Warning;
use regex::{Regex, RegexBuilder};
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Row grammar. Case-insensitive matching has no effect on these literals.
static ROW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r#""(.*?)" = "(.*?)";"#)
        .case_insensitive(true)
        .build()
        .expect("row pattern is a valid regex")
});

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// The result of parsing one file: its entries plus non-fatal warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    /// Entries that matched the row grammar, last definition winning.
    pub table: StringsTable,
    /// Lines that were dropped or overridden, in line order.
    pub warnings: Vec<Warning>,
}

/// Reads and parses a `.strings` file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and
/// [`Error::InvalidEncoding`] if its bytes cannot be decoded.
pub async fn read_strings_file<P: AsRef<Path>>(path: P) -> Result<ParsedTable> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let parsed = parse_bytes(&bytes)?;
    debug!(
        path = %path.display(),
        entries = parsed.table.len(),
        warnings = parsed.warnings.len(),
        "Parsed strings file"
    );
    Ok(parsed)
}

/// Decodes raw file bytes and parses them.
///
/// # Errors
///
/// Returns [`Error::InvalidEncoding`] if the bytes cannot be decoded.
pub fn parse_bytes(bytes: &[u8]) -> Result<ParsedTable> {
    let text = decode(bytes)?;
    Ok(parse_str(&text))
}

/// Decodes file bytes to text.
///
/// UTF-16 is recognized by its byte-order mark in either byte order.
/// Everything else must be UTF-8; a leading UTF-8 byte-order mark is dropped.
///
/// # Errors
///
/// Returns [`Error::InvalidEncoding`] for malformed UTF-8 or UTF-16 data.
pub fn decode(bytes: &[u8]) -> Result<String> {
    if let Some(rest) = bytes.strip_prefix(&UTF8_BOM) {
        return decode_utf8(rest);
    }
    if let Some(rest) = bytes.strip_prefix(&UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(&UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    decode_utf8(bytes)
}

fn decode_utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| Error::InvalidEncoding(format!("not valid UTF-8: {}", e)))
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    let chunks = bytes.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        return Err(Error::InvalidEncoding(
            "UTF-16 data has an odd number of bytes".to_string(),
        ));
    }
    let units: Vec<u16> = chunks.map(|pair| unit([pair[0], pair[1]])).collect();
    String::from_utf16(&units).map_err(|e| Error::InvalidEncoding(format!("not valid UTF-16: {}", e)))
}

/// Parses `.strings` text into a table.
///
/// Never fails: unmatched lines and duplicate keys become warnings.
///
/// # Examples
///
/// ```
/// use lstool_strings::parse_str;
///
/// let parsed = parse_str("\"hello\" = \"world\";\n\n\"bye\" = \"ciao\";\n");
/// assert_eq!(parsed.table.get("hello"), Some("world"));
/// assert_eq!(parsed.table.get("bye"), Some("ciao"));
/// assert!(parsed.warnings.is_empty());
/// ```
#[must_use]
pub fn parse_str(text: &str) -> ParsedTable {
    let mut parsed = ParsedTable::default();

    for (index, line) in split_lines(text).into_iter().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = parse_row(line) else {
            debug!(line_number, "Skipping line that is not a strings entry");
            parsed.warnings.push(Warning::UnmatchedLine {
                line_number,
                content: line.to_string(),
            });
            continue;
        };

        if parsed.table.insert(key, value).is_some() {
            debug!(line_number, key, "Duplicate key overrides earlier value");
            parsed.warnings.push(Warning::DuplicateKey {
                line_number,
                key: key.to_string(),
            });
        }
    }

    parsed
}

/// Extracts the key and value from the first row match on a trimmed line.
fn parse_row(line: &str) -> Option<(&str, &str)> {
    let captures = ROW_PATTERN.captures(line)?;
    let key = captures.get(1)?.as_str();
    let value = captures.get(2)?.as_str();
    Some((key, value))
}

pub(crate) fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits on any line terminator, treating `\r\n` as a single break.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                start = next_idx + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
