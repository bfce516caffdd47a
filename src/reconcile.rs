//! Reconciliation of discovery records into a registry
//!
//! [`reconcile`] folds an ordered batch of [`DiscoveryRecord`]s into a
//! [`Registry`] and reports what changed in a [`ChangeSummary`].
//!
//! ## Rules
//!
//! For each record, in input order, against the progressively updated registry:
//!
//! 1. **Unknown name**: a new entry is created with one remote
//!    (`options.remote_name -> url`) and the record's tags.
//! 2. **Known name, URL already present** under any remote name: no remote is
//!    added and the record counts as skipped. Existing remote names are never
//!    renamed or deduplicated.
//! 3. **Known name, URL missing**: when `add_missing_remote` is set, the URL is
//!    added under `remote_name`, or `remote_name-2`, `remote_name-3`, ... when
//!    that key is taken. Otherwise the remotes are left alone, unless the
//!    entry has no remote at all, in which case the URL is always added.
//! 4. **Tags** are always unioned into the entry.
//!
//! The whole batch is validated before the registry is touched, so an invalid
//! record leaves the input registry unchanged.

use std::fmt;

use log::{debug, info};
use serde::Serialize;

use crate::defaults::DEFAULT_REMOTE_NAME;
use crate::discovery::{validate_all, DiscoveryRecord};
use crate::error::Result;
use crate::registry::{Registry, RepoEntry};

/// Knobs for a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Remote name for new entries and for remotes added to existing entries.
    pub remote_name: String,
    /// Add the record URL as a new remote when an existing entry lacks it.
    pub add_missing_remote: bool,
}

impl MergeOptions {
    pub fn new(remote_name: impl Into<String>) -> Self {
        Self {
            remote_name: remote_name.into(),
            ..Self::default()
        }
    }

    pub fn add_missing_remote(mut self, enabled: bool) -> Self {
        self.add_missing_remote = enabled;
        self
    }
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            remote_name: DEFAULT_REMOTE_NAME.to_string(),
            add_missing_remote: true,
        }
    }
}

/// Counts of what a run changed.
///
/// `skipped` is non-zero on an idempotent re-run, so compare against
/// [`ChangeSummary::has_changes`] rather than `ChangeSummary::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    /// New repository entries.
    pub added: usize,
    /// Remotes added to existing entries.
    pub remote_added: usize,
    /// Tags added to existing entries.
    pub tag_added: usize,
    /// Records whose URL was already registered for their entry.
    pub skipped: usize,
}

impl ChangeSummary {
    /// Whether the run modified the registry. `skipped` only counts no-ops.
    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.remote_added > 0 || self.tag_added > 0
    }
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} remotes added, {} tags added, {} skipped",
            self.added, self.remote_added, self.tag_added, self.skipped
        )
    }
}

/// Fold `records` into `registry`.
///
/// # Errors
///
/// Returns `Error::InvalidRecord` if any record fails validation. No record is
/// applied in that case.
pub fn reconcile(
    mut registry: Registry,
    records: &[DiscoveryRecord],
    options: &MergeOptions,
) -> Result<(Registry, ChangeSummary)> {
    validate_all(records)?;

    let mut summary = ChangeSummary::default();
    for record in records {
        apply_record(&mut registry, record, options, &mut summary);
    }

    debug!("Reconciled {} records: {}", records.len(), summary);
    Ok((registry, summary))
}

fn apply_record(
    registry: &mut Registry,
    record: &DiscoveryRecord,
    options: &MergeOptions,
    summary: &mut ChangeSummary,
) {
    let Some(entry) = registry.get_mut(&record.name) else {
        let entry = RepoEntry::new(options.remote_name.as_str(), record.url.as_str())
            .with_tags(&record.tags);
        info!(
            "Adding {} ({} -> {}) with tags {:?}",
            record.name,
            options.remote_name,
            record.url,
            entry.tags()
        );
        registry.insert(record.name.as_str(), entry);
        summary.added += 1;
        return;
    };

    if let Some(existing) = entry.remote_for_url(&record.url) {
        debug!(
            "{}: {} already registered as remote '{}'",
            record.name, record.url, existing
        );
        summary.skipped += 1;
    } else if options.add_missing_remote || entry.remotes.is_empty() {
        let remote = entry.free_remote_name(&options.remote_name);
        info!("{}: adding remote {} -> {}", record.name, remote, record.url);
        entry.remotes.insert(remote, record.url.clone());
        summary.remote_added += 1;
    } else {
        debug!(
            "{}: {} not registered, leaving remotes untouched",
            record.name, record.url
        );
    }

    for tag in &record.tags {
        if entry.add_tag(tag) {
            info!("{}: tagging '{}'", record.name, tag);
            summary.tag_added += 1;
        }
    }
}
