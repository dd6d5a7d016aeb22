//! The in-memory form of a single `.strings` file.

use crate::error::{Error, Result};
use crate::parser::is_line_break;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Key/value entries of one localization table.
///
/// Keys are unique. Iteration follows byte-wise key order; use
/// [`sorted_entries`](Self::sorted_entries) for the order files are written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringsTable {
    entries: BTreeMap<String, String>,
}

impl StringsTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the value it replaced, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Ensures `key` is present, defaulting its value to the key itself.
    ///
    /// Returns `true` if the key was added, `false` if it already existed.
    /// An existing value is never changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use lstool_strings::StringsTable;
    ///
    /// let mut table = StringsTable::new();
    /// table.insert("hello", "world");
    ///
    /// assert!(table.ensure_key("NEW_KEY"));
    /// assert!(!table.ensure_key("hello"));
    /// assert_eq!(table.get("NEW_KEY"), Some("NEW_KEY"));
    /// assert_eq!(table.get("hello"), Some("world"));
    /// ```
    pub fn ensure_key(&mut self, key: &str) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.entries.insert(key.to_string(), key.to_string());
        true
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` if the table contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keys in byte-wise order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over the entries in byte-wise key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the entries in output order.
    ///
    /// Keys are compared case-insensitively; keys that differ only in case
    /// fall back to case-sensitive order so the result is deterministic.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
        entries
    }
}

/// Output ordering for keys: case-insensitive, then case-sensitive.
#[must_use]
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Checks that `key` survives a render/parse round trip.
///
/// A rendered row is `"<key>" = "<key>";` on one line, so keys must not
/// contain a double quote or any line terminator.
///
/// # Errors
///
/// Returns [`Error::InvalidKey`] naming the offending character class.
///
/// # Examples
///
/// ```
/// use lstool_strings::validate_key;
///
/// assert!(validate_key("settings.title").is_ok());
/// assert!(validate_key("a\" = \"b").is_err());
/// assert!(validate_key("two\nlines").is_err());
/// ```
pub fn validate_key(key: &str) -> Result<()> {
    let reason = if key.contains('"') {
        "contains a double quote"
    } else if key.chars().any(is_line_break) {
        "contains a line break"
    } else {
        return Ok(());
    };
    Err(Error::InvalidKey {
        key: key.to_string(),
        reason,
    })
}

impl<K, V> FromIterator<(K, V)> for StringsTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}
