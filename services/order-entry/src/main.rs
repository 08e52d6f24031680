//! Order entry loop
//!
//! Reads order lines from stdin, feeds them to the matching engine, and
//! prints the resulting trades followed by the current book after every
//! accepted order. Diagnostics go to stderr so stdout stays a clean
//! protocol stream.

use std::io::{self, BufRead, Write};

use matching_engine::MatchingEngine;
use order_entry::{parser, render};

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .init();

    tracing::info!("order entry session started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut engine = MatchingEngine::new();

    for line in stdin.lock().lines() {
        let line = line?;
        match parser::parse_line(&line) {
            Ok(Some(order)) => {
                let trades = engine.process(order);
                out.write_all(render::render_trades(&trades).as_bytes())?;
                out.write_all(render::render_book(&engine).as_bytes())?;
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(%err, line = line.as_str(), "rejected order line");
            }
        }
    }

    out.flush()?;
    tracing::info!("order entry session ended");

    Ok(())
}
