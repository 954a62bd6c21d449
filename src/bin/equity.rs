//! Equity Calculator Binary
//!
//! Simulates one hold'em spot and prints equity, EV and outs.

use clap::Parser;
use holdem_equity::*;

fn main() -> anyhow::Result<()> {
    log();
    cli::Args::parse().run()
}
