//! Runtime configuration.
//!
//! lstool reads no configuration file; every setting comes from command-line
//! options, falling back to the defaults below.

use lstool_strings::WriteMode;
use std::path::PathBuf;

/// File extension that marks a localization table.
pub const DEFAULT_EXTENSION: &str = "strings";

/// Directory scanned when no root is given.
pub const DEFAULT_ROOT: &str = ".";

/// Settings for one lstool run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose tree is scanned for tables
    pub root: PathBuf,
    /// Extension (without the dot) of table files
    pub extension: String,
    /// How rewritten tables replace the old files
    pub write_mode: WriteMode,
}

impl Config {
    /// Create a configuration scanning `root` with default settings.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            write_mode: WriteMode::default(),
        }
    }

    /// Replace the write mode.
    #[must_use]
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}
