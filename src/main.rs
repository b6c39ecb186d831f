use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skaff::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `RUST_LOG` wins over --verbose.
    let fallback = if cli.verbose { "skaff=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
