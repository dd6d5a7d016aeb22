//! Integration tests for lenient parsing of imperfect `.strings` files.
//!
//! Real-world tables contain comments, hand-edited mistakes and mixed line
//! endings. Parsing must keep every valid entry and report the rest.

use indoc::indoc;
use lstool_strings::{Error, Warning, parse_bytes, parse_str, read_strings_file};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn malformed_line_next_to_valid_entry() {
    let input = indoc! {r#"
        "missing_close = "value";
        "valid" = "entry";
    "#};

    let parsed = parse_str(input);

    assert_eq!(parsed.table.len(), 1);
    assert_eq!(parsed.table.get("valid"), Some("entry"));
    assert_eq!(
        parsed.warnings,
        vec![Warning::UnmatchedLine {
            line_number: 1,
            content: r#""missing_close = "value";"#.to_string(),
        }]
    );
}

#[test]
fn xcode_generated_file_with_comments() {
    let input = indoc! {r#"
        /* No comment provided by engineer. */
        "Cancel" = "Abbrechen";

        /* Title for the settings screen */
        "Settings" = "Einstellungen";
    "#};

    let parsed = parse_str(input);

    assert_eq!(parsed.table.get("Cancel"), Some("Abbrechen"));
    assert_eq!(parsed.table.get("Settings"), Some("Einstellungen"));
    assert_eq!(parsed.warnings.len(), 2);
    assert!(parsed.warnings.iter().all(|w| w.kind() == "unmatched_line"));
}

#[test]
fn mixed_line_endings() {
    let input = "\"a\" = \"1\";\r\n\"b\" = \"2\";\r\"c\" = \"3\";\n\"d\" = \"4\";";

    let parsed = parse_str(input);

    assert_eq!(parsed.table.len(), 4);
    assert!(parsed.warnings.is_empty());
}

#[test]
fn whitespace_only_file_is_empty_table() {
    let parsed = parse_str("  \n\t\n\r\n   ");
    assert!(parsed.table.is_empty());
    assert!(parsed.warnings.is_empty());
}

#[test]
fn duplicate_keys_keep_last_value_and_warn() {
    let input = indoc! {r#"
        "title" = "Old";
        "other" = "x";
        "title" = "New";
    "#};

    let parsed = parse_str(input);

    assert_eq!(parsed.table.get("title"), Some("New"));
    assert_eq!(parsed.warnings.len(), 1);
    assert_eq!(parsed.warnings[0].line_number(), 3);
}

#[test]
fn invalid_bytes_are_an_encoding_error() {
    let result = parse_bytes(&[b'"', 0xFF, 0xFF, 0xFF, b'"']);
    assert!(matches!(result, Err(Error::InvalidEncoding(_))));
}

#[tokio::test]
async fn unreadable_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();

    // Reading a directory as a file fails.
    let result = read_strings_file(dir.path()).await;

    assert!(matches!(result, Err(Error::Io(_))));
}
