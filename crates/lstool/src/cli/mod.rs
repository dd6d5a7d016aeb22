//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `insert`: Ensure one or more keys exist in every `.strings` table
//!
//! Anything else, including `insert` without keys, prints a short usage text
//! and exits successfully.
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format
//! - `-C, --root <DIR>`: Directory to scan instead of the current one
//! - `--no-atomic`: Overwrite tables in place
//!
//! # Example
//!
//! ```bash
//! lstool insert greeting
//! lstool -C MyApp/Resources insert title subtitle
//! lstool --json insert NEW_KEY
//! ```

mod args;
mod execute;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use lstool_strings::WriteMode;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_ROOT};
use crate::output::OutputMode;

pub use args::InsertArgs;

/// lstool - keep localization keys in sync across `.strings` files
///
/// Scans a directory tree for `.strings` tables, adds missing keys to every
/// one of them, and rewrites each file sorted by key.
#[derive(Parser, Debug)]
#[command(name = "lstool")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory to scan for tables
    #[arg(short = 'C', long, global = true, value_name = "DIR", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Overwrite files directly instead of writing a temporary file and renaming it
    #[arg(long, global = true)]
    pub no_atomic: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Insert keys into every table
    ///
    /// Missing keys get the key itself as value; existing values are kept.
    /// Every table is rewritten sorted case-insensitively by key.
    Insert(InsertArgs),
}

impl Cli {
    /// Parse CLI arguments from the command line.
    ///
    /// `--help` and `--version` print and exit. Any other parse error yields
    /// `None` so the caller can show the usage text.
    pub fn parse_args() -> Option<Self> {
        match <Self as Parser>::try_parse() {
            Ok(cli) => Some(cli),
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.exit()
            }
            Err(err) => {
                tracing::debug!(error = %err, "Unrecognized arguments");
                None
            }
        }
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Build the run configuration from the global flags.
    pub fn config(&self) -> Config {
        let write_mode = if self.no_atomic {
            WriteMode::InPlace
        } else {
            WriteMode::Atomic
        };
        Config::new(&self.root).with_write_mode(write_mode)
    }

    /// Output mode selected by `--json`.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;

        match &self.command {
            Some(Commands::Insert(args)) if !args.keys.is_empty() => {
                let app = App::new(self.config())?;
                execute::execute_insert(&app, args, self.output_mode()).await
            }
            _ => {
                crate::output::print_usage()?;
                Ok(())
            }
        }
    }
}
