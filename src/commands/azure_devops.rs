//! Azure DevOps command implementation
//!
//! Lists an organization's repositories with `az devops invoke` and folds them
//! into the registry. Remotes added to repositories that are already
//! registered default to the name `devops`.

use anyhow::Result;
use clap::Args;

use super::sync::{self, SyncArgs};
use repo_registry::defaults::AZURE_DEVOPS_REMOTE_NAME;
use repo_registry::output::OutputConfig;
use repo_registry::provider::azure_devops::AzureDevOpsProvider;
use repo_registry::provider::Protocol;

/// Arguments for the azure-devops command
#[derive(Args, Debug)]
pub struct AzureDevOpsArgs {
    #[command(flatten)]
    pub sync: SyncArgs,

    /// Azure DevOps organization name
    #[arg(long, value_name = "ORG")]
    pub organization: String,

    /// Only include repositories of this project
    #[arg(long, value_name = "PROJECT")]
    pub project: Option<String>,

    /// Clone URL protocol (ssh or https)
    #[arg(long, value_name = "PROTOCOL", default_value = "https")]
    pub protocol: Protocol,
}

/// Execute the azure-devops command
pub fn execute(args: AzureDevOpsArgs, output: OutputConfig) -> Result<()> {
    let provider = AzureDevOpsProvider::new(args.organization, args.project, args.protocol);
    sync::run(&args.sync, &provider, AZURE_DEVOPS_REMOTE_NAME, output)
}
