//! Statement Example
//!
//! Prints billing statements for the invoices in a fixture set.
//!
//! Use `-f` to load a fixture set by name
//! Use `--format html` to render HTML instead of plain text
//! Use `-i` to print a single invoice by index

use std::io::{self, Write};

use anyhow::Result;

use clap::Parser;
use playbill::{fixtures::Fixture, logging, utils::StatementArgs};

/// Statement Example
pub fn main() -> Result<()> {
    let args = StatementArgs::parse();

    logging::init(&args.logging)?;

    let fixture = Fixture::with_base_path(&args.base_path).load_set(&args.fixture)?;

    let printers = match args.invoice {
        Some(idx) => vec![fixture.printer(idx)?],
        None => fixture.printers().collect(),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for printer in printers {
        handle.write_all(printer.render(args.format)?.as_bytes())?;
    }

    Ok(())
}
