//! Tracing setup.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages
//! - `RUST_LOG=vend_core=trace` - Show trace for the core crate only
//! - Default: WARN, with INFO for the vend crates (DEBUG when verbose)
//!
//! Logs go to stderr: stdout carries the customer dialogue.

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,vend_core=debug,vend_cli=debug"
    } else {
        "warn,vend_core=info,vend_cli=info"
    }
}

/// Initializes the global tracing subscriber.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
