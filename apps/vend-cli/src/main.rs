//! # vend
//!
//! Entry point for the interactive vending machine.
//!
//! ## Startup Sequence
//! 1. Parse command line flags
//! 2. Load configuration from the environment and apply the flags
//! 3. Initialize tracing (stderr)
//! 4. Run the shell over stdin/stdout

use anyhow::Context;
use clap::Parser;
use tracing::info;
use vend_cli::{logging, Cli, VendConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = VendConfig::load()
        .context("failed to load configuration")?
        .with_cli(&cli);

    logging::init_tracing(config.verbose);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let change = vend_cli::run(&config, stdin.lock(), stdout.lock())?;

    info!(total = change.total().kr(), "Session closed");
    Ok(())
}
