//! lstool CLI binary.

use anyhow::Result;
use lstool::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the lstool CLI.
///
/// Uses tokio's current_thread runtime: the pipeline is strictly sequential.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=lstool=debug,lstool_strings=debug lstool insert title
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lstool=warn,lstool_strings=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting lstool CLI");

    match Cli::parse_args() {
        Some(cli) => cli.execute().await?,
        None => lstool::output::print_usage()?,
    }

    tracing::debug!("lstool CLI completed successfully");
    Ok(())
}
