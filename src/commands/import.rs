//! Import command implementation
//!
//! Folds discovery records from a JSON file into the registry. This is the
//! entry point for providers that run outside this tool: anything that can
//! print `[{"name": ..., "url": ..., "tags": [...]}]` can feed the registry.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::sync::{self, SyncArgs};
use repo_registry::defaults::DEFAULT_REMOTE_NAME;
use repo_registry::output::OutputConfig;
use repo_registry::provider::file::FileProvider;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    #[command(flatten)]
    pub sync: SyncArgs,

    /// JSON file of discovery records (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,
}

/// Execute the import command
pub fn execute(args: ImportArgs, output: OutputConfig) -> Result<()> {
    let provider = FileProvider::new(args.file);
    sync::run(&args.sync, &provider, DEFAULT_REMOTE_NAME, output)
}
