//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use repo_registry::output::OutputConfig;

/// Repository Registry - Sync provider repositories into a gitopolis registry
#[derive(Parser, Debug)]
#[command(name = "repo-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add GitHub repositories listed by `gh` to the registry
    Github(commands::github::GithubArgs),

    /// Add Azure DevOps repositories listed by `az` to the registry
    AzureDevops(commands::azure_devops::AzureDevOpsArgs),

    /// Add repositories from a JSON file of discovery records
    Import(commands::import::ImportArgs),

    /// List the repositories in a registry
    List(commands::list::ListArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Github(args) => commands::github::execute(args, output),
            Commands::AzureDevops(args) => commands::azure_devops::execute(args, output),
            Commands::Import(args) => commands::import::execute(args, output),
            Commands::List(args) => commands::list::execute(args, output),
        }
    }
}

/// Log to stderr at `level`; `RUST_LOG` takes precedence when set.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when commands run inside tests.
    let _ = env_logger::Builder::from_env(env)
        .format_target(false)
        .try_init();
}
