//! Shared registry options and the discover, reconcile, and report flow used
//! by every discovery command.

use anyhow::{Context, Result};
use clap::Args;
use log::warn;
use std::path::PathBuf;

use repo_registry::defaults::resolve_target;
use repo_registry::output::OutputConfig;
use repo_registry::provider::Provider;
use repo_registry::reconcile::MergeOptions;
use repo_registry::{reconcile_and_persist, reconcile_preview};

/// Registry options shared by the discovery commands
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Registry file, or a directory in which `.gitopolis.toml` is used
    #[arg(short, long, value_name = "PATH", env = "REPO_REGISTRY_TARGET")]
    pub target: PathBuf,

    /// Remote name for new entries and for remotes added to existing entries
    #[arg(long, value_name = "NAME", value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub remote_name: Option<String>,

    /// Leave the remotes of existing entries untouched
    #[arg(long)]
    pub no_add_remote: bool,

    /// Show what would change without writing the registry
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl SyncArgs {
    /// Merge options for this run, falling back to the command's default remote.
    pub fn merge_options(&self, default_remote: &str) -> MergeOptions {
        let remote = self.remote_name.as_deref().unwrap_or(default_remote);
        MergeOptions::new(remote).add_missing_remote(!self.no_add_remote)
    }
}

/// Discover records with `provider` and fold them into the target registry.
pub fn run(
    args: &SyncArgs,
    provider: &dyn Provider,
    default_remote: &str,
    output: OutputConfig,
) -> Result<()> {
    let output = output.quiet(args.quiet);
    let path = resolve_target(&args.target);
    let options = args.merge_options(default_remote);

    output.status(
        "🔍",
        "[SCAN]",
        format!("Discovering repositories ({})", provider.name()),
    );
    let records = provider
        .discover()
        .with_context(|| format!("Discovery failed for provider '{}'", provider.name()))?;

    if records.is_empty() {
        warn!("No repositories found");
        output.status("⚠️", "[WARN]", "No repositories found, registry left unchanged");
        return Ok(());
    }
    output.detail(format!("{} repositories found", records.len()));

    if args.dry_run {
        let (_, summary) = reconcile_preview(&path, &records, &options)?;
        output.status(
            "🔎",
            "[DRY RUN]",
            format!("Would update {}", path.display()),
        );
        output.detail(summary.to_string());
    } else {
        let summary = reconcile_and_persist(&path, &records, &options)?;
        output.status("✅", "[OK]", format!("Updated {}", path.display()));
        output.detail(summary.to_string());
    }

    Ok(())
}
