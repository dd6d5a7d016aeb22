//! Warning types for non-fatal issues found while parsing `.strings` files.
//!
//! Parsing never fails because of a single bad line. Lines that do not match
//! the `"key" = "value";` grammar are dropped, and a key that appears twice
//! keeps its last value. Both cases are reported as a [`Warning`] so callers
//! can log them without aborting.
//!
//! # Examples
//!
//! ```
//! use lstool_strings::parse_str;
//! use lstool_strings::warning::Warning;
//!
//! let parsed = parse_str("\"a\" = \"1\";\nnot an entry\n\"a\" = \"2\";\n");
//!
//! assert_eq!(parsed.table.get("a"), Some("2"));
//! assert_eq!(
//!     parsed.warnings,
//!     vec![
//!         Warning::UnmatchedLine {
//!             line_number: 2,
//!             content: "not an entry".to_string(),
//!         },
//!         Warning::DuplicateKey {
//!             line_number: 3,
//!             key: "a".to_string(),
//!         },
//!     ]
//! );
//! ```

/// A non-fatal warning that occurred while parsing a `.strings` file.
///
/// Each variant carries the 1-based line number it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A non-empty line did not match the row grammar and was skipped.
    UnmatchedLine {
        /// The 1-based line number of the skipped line.
        line_number: usize,
        /// The trimmed content of the line.
        content: String,
    },

    /// A key was defined again; the later value replaced the earlier one.
    DuplicateKey {
        /// The 1-based line number of the overriding definition.
        line_number: usize,
        /// The duplicated key.
        key: String,
    },
}

impl Warning {
    /// Returns the line number associated with this warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use lstool_strings::warning::Warning;
    ///
    /// let warning = Warning::DuplicateKey {
    ///     line_number: 42,
    ///     key: "title".to_string(),
    /// };
    /// assert_eq!(warning.line_number(), 42);
    /// ```
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::UnmatchedLine { line_number, .. } | Self::DuplicateKey { line_number, .. } => {
                *line_number
            }
        }
    }

    /// Returns a human-readable description of the warning.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::UnmatchedLine {
                line_number,
                content,
            } => {
                format!("line {}: not a strings entry: {}", line_number, content)
            }
            Self::DuplicateKey { line_number, key } => {
                format!("line {}: duplicate key '{}' overrides earlier value", line_number, key)
            }
        }
    }

    /// Returns a static string identifying the warning kind.
    ///
    /// Useful for filtering and grouping warnings without matching on the
    /// enum variants.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnmatchedLine { .. } => "unmatched_line",
            Self::DuplicateKey { .. } => "duplicate_key",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}
