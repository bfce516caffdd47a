//! Discovery records
//!
//! A [`DiscoveryRecord`] is the provider-agnostic description of one
//! remotely-discovered repository: a name, a canonical clone URL, and the tags
//! to apply. Providers produce them; the reconciler consumes them.
//!
//! The record name becomes a directory name when the registry is cloned, so it
//! must be non-empty, must not contain path separators, and must not be `.` or
//! `..`. URLs are opaque strings compared byte for byte.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One repository reported by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryRecord {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DiscoveryRecord {
    pub fn new<I, S>(name: impl Into<String>, url: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            url: url.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Check that the record can be folded into a registry.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRecord` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::invalid_record(&self.name, "name is empty"));
        }
        if self.name.contains(['/', '\\']) {
            return Err(Error::invalid_record(
                &self.name,
                "name contains a path separator",
            ));
        }
        if self.name == "." || self.name == ".." {
            return Err(Error::invalid_record(
                &self.name,
                "name is a relative directory reference",
            ));
        }
        if self.url.is_empty() {
            return Err(Error::invalid_record(&self.name, "url is empty"));
        }
        Ok(())
    }
}

/// Validate a whole batch, failing on the first invalid record.
pub fn validate_all(records: &[DiscoveryRecord]) -> Result<()> {
    records.iter().try_for_each(DiscoveryRecord::validate)
}
