//! # Console Shell
//!
//! Drives a [`Vending`] machine from line-based input.
//!
//! ## One Round
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Available Products: ... / Available Denominations: ...                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Product ID? ──── "exit" / EOF ──────────────────► settle & print change│
//! │       │      ──── "details D1" ──► print description, next round        │
//! │       ▼                                                                 │
//! │  Denomination? ── not in set ──► "Invalid denomination.", next round    │
//! │       │                          (nothing inserted)                     │
//! │       ▼                                                                 │
//! │  insert_money(d) ─► purchase(id) ─┬─ Ok  ─► "Purchased: ..." + use msg  │
//! │                                   └─ Err ─► error message               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell is generic over its input and output so tests can script a
//! whole session with in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{debug, info_span, warn};
use vend_core::validation::parse_denomination;
use vend_core::{ChangeReport, Denomination, Vending};

use crate::error::ShellResult;
use crate::session::Session;

const EXIT_COMMAND: &str = "exit";
const DETAILS_COMMAND: &str = "details";

pub struct Shell<V, R, W> {
    vending: V,
    input: R,
    output: W,
    json_change: bool,
}

impl<V, R, W> Shell<V, R, W>
where
    V: Vending,
    R: BufRead,
    W: Write,
{
    pub fn new(vending: V, input: R, output: W) -> Self {
        Shell {
            vending,
            input,
            output,
            json_change: false,
        }
    }

    /// Print the change as a JSON receipt instead of text lines.
    pub fn json_change(mut self, enabled: bool) -> Self {
        self.json_change = enabled;
        self
    }

    /// Runs rounds until the customer exits or input ends, then settles.
    pub fn run(&mut self) -> ShellResult<ChangeReport> {
        let session = Session::start();
        let span = info_span!("session", id = %session.id);
        let _guard = span.enter();

        while self.round()? {}

        let change = self.vending.end_transaction();
        self.print_change(&session, &change)?;
        Ok(change)
    }

    /// Gives the machine back, e.g. to inspect it after a scripted run.
    pub fn into_vending(self) -> V {
        self.vending
    }

    /// Returns `false` when the session should end.
    fn round(&mut self) -> ShellResult<bool> {
        self.print_menu()?;

        write!(
            self.output,
            "Enter the product ID you want to purchase (or '{EXIT_COMMAND}' to end): "
        )?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        let product_id = line.trim();

        if product_id.eq_ignore_ascii_case(EXIT_COMMAND) {
            return Ok(false);
        }

        if let Some(target) = details_target(product_id) {
            let details = self.vending.details(target);
            writeln!(self.output, "{details}")?;
            return Ok(true);
        }

        write!(
            self.output,
            "Enter the denomination ({}): ",
            Denomination::menu()
        )?;
        self.output.flush()?;

        let Some(raw) = self.read_line()? else {
            return Ok(false);
        };

        let denomination = match parse_denomination(&raw) {
            Ok(d) => d,
            Err(e) => {
                warn!(input = raw.trim(), error = %e, "Rejected denomination");
                writeln!(self.output, "Invalid denomination.")?;
                return Ok(true);
            }
        };

        self.vending.insert_money(denomination);

        match self.vending.purchase(product_id) {
            Ok(product) => {
                writeln!(self.output, "Purchased: {}", product.name)?;
                writeln!(self.output, "{}", product.use_message())?;
            }
            Err(e) => {
                debug!(product_id, error = %e, "Purchase failed");
                writeln!(self.output, "{e}")?;
            }
        }

        Ok(true)
    }

    fn print_menu(&mut self) -> ShellResult<()> {
        writeln!(self.output, "Available Products:")?;
        for line in self.vending.show_all() {
            writeln!(self.output, "{line}")?;
        }
        writeln!(
            self.output,
            "Available Denominations: {}",
            Denomination::menu()
        )?;
        Ok(())
    }

    fn print_change(&mut self, session: &Session, change: &ChangeReport) -> ShellResult<()> {
        if self.json_change {
            let receipt = session.receipt(self.vending.policy(), change.clone());
            writeln!(self.output, "{}", serde_json::to_string_pretty(&receipt)?)?;
            return Ok(());
        }

        writeln!(self.output, "Change:")?;
        if change.is_empty() {
            writeln!(self.output, "No change.")?;
        }
        for line in change.lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Next input line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> ShellResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// `"details D1"` → `Some("D1")`; the keyword is case-insensitive.
fn details_target(input: &str) -> Option<&str> {
    let (command, rest) = input.split_once(char::is_whitespace)?;
    if command.eq_ignore_ascii_case(DETAILS_COMMAND) {
        Some(rest.trim())
    } else {
        None
    }
}
