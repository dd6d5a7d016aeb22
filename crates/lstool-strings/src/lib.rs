//! Reading and writing of `.strings` localization tables.
//!
//! A `.strings` file holds one `"key" = "value";` entry per line. This crate
//! parses such files leniently (lines that do not match the row grammar are
//! reported as [`Warning`]s and skipped), keeps entries in a [`StringsTable`],
//! and renders tables back with keys sorted case-insensitively.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod atomic;
pub mod error;
pub mod parser;
pub mod table;
pub mod warning;
pub mod writer;

pub use atomic::write_strings_atomic;
pub use error::{Error, Result};
pub use parser::{ParsedTable, decode, parse_bytes, parse_str, read_strings_file};
pub use table::{StringsTable, compare_keys, validate_key};
pub use warning::Warning;
pub use writer::{WriteMode, render, write_strings, write_strings_in_place};
