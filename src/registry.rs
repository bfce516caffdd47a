//! In-memory model of the persisted registry.
//!
//! A [`Registry`] maps repository names to [`RepoEntry`] values. Each entry
//! carries its named remotes and an ordered, duplicate-free tag set. Keys the
//! model does not understand are kept in `extra` tables so that a run never
//! drops content written by other tools.

use std::collections::BTreeMap;

/// Remote name to URL mapping for a single repository.
pub type Remotes = BTreeMap<String, String>;

/// A single repository in the registry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoEntry {
    /// Remote name to URL.
    pub remotes: Remotes,
    tags: Vec<String>,
    /// Keys of the entry's table other than `remotes` and `tags`.
    pub extra: toml::Table,
}

impl RepoEntry {
    /// Create an entry with a single remote and no tags.
    pub fn new(remote_name: impl Into<String>, url: impl Into<String>) -> Self {
        let mut remotes = Remotes::new();
        remotes.insert(remote_name.into(), url.into());
        Self {
            remotes,
            tags: Vec::new(),
            extra: toml::Table::new(),
        }
    }

    /// Builder-style helper that adds every tag in `tags`, skipping duplicates.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.add_tag(tag.as_ref());
        }
        self
    }

    /// Tags in insertion order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Add a tag if it is not present yet. Returns `true` when the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.has_tag(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Name of the remote pointing at `url`, compared byte for byte.
    pub fn remote_for_url(&self, url: &str) -> Option<&str> {
        self.remotes
            .iter()
            .find(|(_, existing)| existing.as_str() == url)
            .map(|(name, _)| name.as_str())
    }

    /// First remote name not yet used by this entry: `base`, then `base-2`,
    /// `base-3`, and so on.
    pub fn free_remote_name(&self, base: &str) -> String {
        if !self.remotes.contains_key(base) {
            return base.to_string();
        }
        let mut suffix = 2;
        loop {
            let candidate = format!("{}-{}", base, suffix);
            if !self.remotes.contains_key(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

/// The full registry: repository name to entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    repos: BTreeMap<String, RepoEntry>,
    /// Top-level keys other than `repos`.
    pub extra: toml::Table,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repositories.
    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.repos.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&RepoEntry> {
        self.repos.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut RepoEntry> {
        self.repos.get_mut(name)
    }

    /// Insert or replace an entry, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, entry: RepoEntry) -> Option<RepoEntry> {
        self.repos.insert(name.into(), entry)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RepoEntry)> {
        self.repos.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Entries carrying `tag`, in name order.
    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = (&'a str, &'a RepoEntry)> {
        self.iter().filter(move |(_, entry)| entry.has_tag(tag))
    }
}
