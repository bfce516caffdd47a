//! Registry codec
//!
//! Converts a [`Registry`] to and from its on-disk TOML form:
//!
//! ```toml
//! [repos.<name>]
//! tags = ["public", "github"]
//!
//! [repos.<name>.remotes]
//! origin = "git@github.com:owner/name.git"
//! ```
//!
//! Decoding validates the schema and keeps every key it does not recognise.
//! Encoding is deterministic: repositories and remotes are written in sorted
//! key order, tags in their stored order, and the result is normalized with
//! the taplo formatter. Equal registries therefore always encode to identical
//! bytes, and `decode(encode(r)) == r`.

use log::debug;
use toml::Value as TomlValue;

use crate::error::{Error, Result};
use crate::registry::{Registry, RepoEntry};

const REPOS_KEY: &str = "repos";
const REMOTES_KEY: &str = "remotes";
const TAGS_KEY: &str = "tags";

/// Decode raw registry bytes.
///
/// Empty or whitespace-only input yields an empty registry.
///
/// # Errors
///
/// Returns `Error::Format` if the bytes are not UTF-8, not valid TOML, or do
/// not match the registry schema.
pub fn decode(raw: &[u8]) -> Result<Registry> {
    let text = std::str::from_utf8(raw).map_err(|err| Error::Format {
        message: format!("Registry is not valid UTF-8: {}", err),
        hint: None,
    })?;
    decode_str(text)
}

/// Decode registry text. See [`decode`].
pub fn decode_str(text: &str) -> Result<Registry> {
    if text.trim().is_empty() {
        debug!("Registry text is empty, starting from an empty registry");
        return Ok(Registry::new());
    }

    let mut root: toml::Table = toml::from_str(text).map_err(|err| Error::Format {
        message: format!("Failed to parse registry TOML: {}", err),
        hint: Some("Check the file for unbalanced brackets or unquoted strings".to_string()),
    })?;

    let mut registry = Registry::new();
    if let Some(repos) = root.remove(REPOS_KEY) {
        let repos = match repos {
            TomlValue::Table(repos) => repos,
            other => {
                return Err(Error::Format {
                    message: format!("'{}' must be a table, found {}", REPOS_KEY, other.type_str()),
                    hint: Some("Declare repositories as [repos.<name>] tables".to_string()),
                })
            }
        };
        for (name, value) in repos {
            let entry = decode_entry(&name, value)?;
            registry.insert(name, entry);
        }
    }
    registry.extra = root;

    Ok(registry)
}

fn decode_entry(name: &str, value: TomlValue) -> Result<RepoEntry> {
    let mut table = match value {
        TomlValue::Table(table) => table,
        other => {
            return Err(Error::format(format!(
                "repos.{} must be a table, found {}",
                name,
                other.type_str()
            )))
        }
    };

    let mut entry = RepoEntry::default();

    if let Some(remotes) = table.remove(REMOTES_KEY) {
        let remotes = match remotes {
            TomlValue::Table(remotes) => remotes,
            other => {
                return Err(Error::format(format!(
                    "repos.{}.remotes must be a table, found {}",
                    name,
                    other.type_str()
                )))
            }
        };
        for (remote, url) in remotes {
            match url {
                TomlValue::String(url) => {
                    entry.remotes.insert(remote, url);
                }
                other => {
                    return Err(Error::Format {
                        message: format!(
                            "repos.{}.remotes.{} must be a string, found {}",
                            name,
                            remote,
                            other.type_str()
                        ),
                        hint: Some("Remote values are URLs, e.g. origin = \"git@host:repo.git\"".to_string()),
                    });
                }
            }
        }
    }

    if let Some(tags) = table.remove(TAGS_KEY) {
        let tags = match tags {
            TomlValue::Array(tags) => tags,
            other => {
                return Err(Error::format(format!(
                    "repos.{}.tags must be an array, found {}",
                    name,
                    other.type_str()
                )))
            }
        };
        for tag in tags {
            match tag {
                TomlValue::String(tag) => {
                    entry.add_tag(&tag);
                }
                other => {
                    return Err(Error::format(format!(
                        "repos.{}.tags must only contain strings, found {}",
                        name,
                        other.type_str()
                    )));
                }
            }
        }
    }

    entry.extra = table;
    Ok(entry)
}

/// Encode a registry to bytes. See [`encode_string`].
pub fn encode(registry: &Registry) -> Result<Vec<u8>> {
    encode_string(registry).map(String::into_bytes)
}

/// Encode a registry to formatted TOML text.
///
/// An empty registry without extra content encodes to an empty string.
pub fn encode_string(registry: &Registry) -> Result<String> {
    let mut root = registry.extra.clone();

    if !registry.is_empty() {
        let mut repos = toml::Table::new();
        for (name, entry) in registry.iter() {
            repos.insert(name.to_string(), TomlValue::Table(encode_entry(entry)));
        }
        root.insert(REPOS_KEY.to_string(), TomlValue::Table(repos));
    }

    if root.is_empty() {
        return Ok(String::new());
    }

    let serialized = toml::to_string(&root).map_err(|err| Error::Format {
        message: format!("Failed to serialize registry: {}", err),
        hint: None,
    })?;

    Ok(taplo::formatter::format(
        &serialized,
        taplo::formatter::Options::default(),
    ))
}

fn encode_entry(entry: &RepoEntry) -> toml::Table {
    let mut table = entry.extra.clone();

    let tags = entry
        .tags()
        .iter()
        .map(|tag| TomlValue::String(tag.clone()))
        .collect();
    table.insert(TAGS_KEY.to_string(), TomlValue::Array(tags));

    let remotes = entry
        .remotes
        .iter()
        .map(|(name, url)| (name.clone(), TomlValue::String(url.clone())))
        .collect();
    table.insert(REMOTES_KEY.to_string(), TomlValue::Table(remotes));

    table
}
