//! GitHub command implementation
//!
//! Lists public and private repositories with `gh repo list` and folds them
//! into the registry, tagged with their visibility and `github`.

use anyhow::Result;
use clap::Args;

use super::sync::{self, SyncArgs};
use repo_registry::defaults::DEFAULT_REMOTE_NAME;
use repo_registry::output::OutputConfig;
use repo_registry::provider::github::GitHubProvider;
use repo_registry::provider::Protocol;

/// Arguments for the github command
#[derive(Args, Debug)]
pub struct GithubArgs {
    #[command(flatten)]
    pub sync: SyncArgs,

    /// GitHub user or organization (defaults to the authenticated user)
    #[arg(long, value_name = "OWNER")]
    pub owner: Option<String>,

    /// Clone URL protocol (ssh or https)
    #[arg(long, value_name = "PROTOCOL", default_value = "ssh")]
    pub protocol: Protocol,
}

/// Execute the github command
pub fn execute(args: GithubArgs, output: OutputConfig) -> Result<()> {
    let provider = GitHubProvider::new(args.owner, args.protocol);
    sync::run(&args.sync, &provider, DEFAULT_REMOTE_NAME, output)
}
