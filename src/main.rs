//! Main entry point for the zipmeta CLI application.
//!
//! Builds the archive pipeline for the requested location and runs it once.
//! JSON lines go to stdout, diagnostics to stderr.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use zipmeta::{Cli, archive_to_stdout};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let pipeline = archive_to_stdout(&cli.location);
    tracing::debug!(location = %cli.location, "running pipeline");

    pipeline.run().await
}
