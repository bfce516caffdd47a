//! # Repository Registry CLI
//!
//! This is the binary entry point for the `repo-registry` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging from `--log-level` (or `RUST_LOG`).
//! - Dispatching to the selected command and reporting errors.
//!
//! Reconciliation itself lives in the `repo_registry` library crate; the
//! binary only wires providers, options, and output together.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
