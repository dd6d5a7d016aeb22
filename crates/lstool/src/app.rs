//! Application context for CLI command execution.
//!
//! # Example
//!
//! ```no_run
//! use lstool::app::App;
//! use lstool::config::Config;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let app = App::new(Config::new("."))?;
//!     let outcome = app.insert("greeting").await?;
//!     println!("{} files updated", outcome.written.len());
//!     Ok(())
//! }
//! ```

use crate::commands::insert::{self, InsertOutcome};
use crate::config::Config;
use crate::error::{Result, ScanError};
use tracing::debug;

/// Application context for CLI operations.
///
/// Holds the run configuration. Tables are not cached here: every insert
/// rescans and reparses the tree.
#[derive(Debug, Clone)]
pub struct App {
    config: Config,
}

impl App {
    /// Create an App for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured root does not exist or is not a
    /// directory.
    pub fn new(config: Config) -> Result<Self> {
        let root = &config.root;
        if !root.exists() {
            return Err(ScanError::RootNotFound(root.clone()).into());
        }
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.clone()).into());
        }
        debug!(root = %root.display(), "Using scan root");
        Ok(Self { config })
    }

    /// Get the run configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Insert one key into every table under the root.
    pub async fn insert(&self, key: &str) -> Result<InsertOutcome> {
        insert::insert(&self.config, key).await
    }
}
