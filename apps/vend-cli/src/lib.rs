//! # vend-cli
//!
//! Console front end for the vending machine.
//!
//! ## Module Organization
//! ```text
//! vend_cli/
//! ├── lib.rs      ◄─── You are here (wiring)
//! ├── config.rs   ◄─── Environment + command line configuration
//! ├── logging.rs  ◄─── tracing subscriber setup
//! ├── session.rs  ◄─── Session id, timestamps, JSON receipt
//! ├── shell.rs    ◄─── The interactive loop
//! └── error.rs    ◄─── Shell error type
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod shell;

use std::io::{BufRead, Write};

use tracing::info;
use vend_core::{Catalog, ChangeReport, VendingService};

pub use config::{Cli, ConfigError, VendConfig};
pub use error::{ShellError, ShellResult};
pub use shell::Shell;

/// Runs one vending session with the reference catalog.
pub fn run<R: BufRead, W: Write>(
    config: &VendConfig,
    input: R,
    output: W,
) -> ShellResult<ChangeReport> {
    info!(credit_policy = %config.credit_policy, "Vending machine ready");

    let machine = VendingService::new(Catalog::reference(), config.credit_policy);

    Shell::new(machine, input, output)
        .json_change(config.json_change)
        .run()
}
