//! # List Command Implementation
//!
//! Prints the repositories of a registry with their tags and remotes,
//! optionally limited to one tag. This is a read-only command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use repo_registry::defaults::resolve_target;
use repo_registry::output::{emoji, OutputConfig};
use repo_registry::persist::load;
use repo_registry::registry::RepoEntry;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Registry file, or a directory in which `.gitopolis.toml` is used
    #[arg(short, long, value_name = "PATH", env = "REPO_REGISTRY_TARGET")]
    pub target: PathBuf,

    /// Only show repositories carrying this tag
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,
}

/// Execute the list command
pub fn execute(args: ListArgs, output: OutputConfig) -> Result<()> {
    let path = resolve_target(&args.target);
    let registry = load(&path)?;

    let entries: Vec<(&str, &RepoEntry)> = match &args.tag {
        Some(tag) => registry.tagged(tag).collect(),
        None => registry.iter().collect(),
    };

    if entries.is_empty() {
        match &args.tag {
            Some(tag) => println!("No repositories tagged '{}' in {}", tag, path.display()),
            None => println!("No repositories in {}", path.display()),
        }
        return Ok(());
    }

    for (name, entry) in &entries {
        println!("{}", format_entry(name, entry, &output));
    }
    println!();
    println!("{} repositories", entries.len());
    Ok(())
}

fn format_entry(name: &str, entry: &RepoEntry, output: &OutputConfig) -> String {
    let mut text = format!("{} {}", emoji(output, "📦", "-"), name);
    if !entry.tags().is_empty() {
        text.push_str(&format!(" [{}]", entry.tags().join(", ")));
    }
    for (remote, url) in &entry.remotes {
        text.push_str(&format!("\n     {} {}", remote, url));
    }
    text
}
