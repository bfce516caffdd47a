//! # Repository Registry Library
//!
//! This library reconciles repositories discovered on a source-control
//! provider against a local, gitopolis-style registry file (`.gitopolis.toml`).
//! Re-running it with the same discovery results never creates duplicate
//! entries, duplicate remotes, or duplicate tags, and a failed run never leaves
//! a partially written registry behind.
//!
//! ## Quick Example
//!
//! ```
//! use repo_registry::discovery::DiscoveryRecord;
//! use repo_registry::reconcile::{reconcile, MergeOptions};
//! use repo_registry::registry::Registry;
//!
//! let records = vec![DiscoveryRecord::new("foo", "git@host:foo.git", ["public"])];
//! let (registry, summary) =
//!     reconcile(Registry::new(), &records, &MergeOptions::default()).unwrap();
//!
//! assert_eq!(summary.added, 1);
//! assert_eq!(registry.get("foo").unwrap().remotes["origin"], "git@host:foo.git");
//! ```
//!
//! ## Core Concepts
//!
//! - **Registry (`registry`)**: repository name to remotes and tags.
//! - **Codec (`codec`)**: the TOML form of the registry.
//! - **Discovery records (`discovery`)**: what providers report, validated
//!   before use.
//! - **Reconciler (`reconcile`)**: a pure fold of records into a registry.
//! - **Persister (`persist`)**: loading and atomic write-temp-then-rename.
//! - **Providers (`provider`)**: `gh`, `az`, and JSON record files as
//!   sources of discovery records.
//! - **Output (`output`)**: emoji or plain status lines for the CLI.
//!
//! [`reconcile_and_persist`] ties the core together: load, reconcile, persist.
//! Callers that run several providers against the same registry file must run
//! these cycles one at a time; no cross-process locking is done here.

pub mod codec;
pub mod defaults;
pub mod discovery;
pub mod error;
pub mod output;
pub mod persist;
pub mod provider;
pub mod reconcile;
pub mod registry;

#[cfg(test)]
mod registry_proptest;

use std::path::Path;

use log::info;

use crate::discovery::DiscoveryRecord;
use crate::error::Result;
use crate::reconcile::{ChangeSummary, MergeOptions};
use crate::registry::Registry;

/// Load the registry at `existing_path`, fold `records` into it, and write the
/// result back atomically.
///
/// # Errors
///
/// - `Error::Format` if the existing registry is malformed.
/// - `Error::InvalidRecord` if any record fails validation.
/// - `Error::Io` / `Error::Persist` on storage failures.
///
/// In every error case the registry file is left byte-for-byte unchanged.
pub fn reconcile_and_persist(
    existing_path: &Path,
    records: &[DiscoveryRecord],
    options: &MergeOptions,
) -> Result<ChangeSummary> {
    let (registry, summary) = reconcile_preview(existing_path, records, options)?;
    persist::persist(&registry, existing_path)?;
    info!("Wrote {} ({})", existing_path.display(), summary);
    Ok(summary)
}

/// Load and reconcile without writing anything.
pub fn reconcile_preview(
    existing_path: &Path,
    records: &[DiscoveryRecord],
    options: &MergeOptions,
) -> Result<(Registry, ChangeSummary)> {
    let current = persist::load(existing_path)?;
    reconcile::reconcile(current, records, options)
}
