//! GitHub provider backed by the `gh` CLI.
//!
//! Public and private repositories are listed with two `gh repo list` calls.
//! Each repository is tagged with its visibility (`public`, `private`, or
//! `internal`) and `github`.

use log::info;
use serde::Deserialize;

use super::{malformed, run_listing_command, Protocol, Provider};
use crate::discovery::DiscoveryRecord;
use crate::error::Result;

const PROVIDER: &str = "github";
const SOURCE_TAG: &str = "github";
const JSON_FIELDS: &str = "name,isPrivate,sshUrl,url,visibility";
const LIST_LIMIT: &str = "1000";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GhRepo {
    name: String,
    #[serde(default)]
    is_private: bool,
    #[serde(default)]
    ssh_url: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    visibility: Option<String>,
}

impl GhRepo {
    fn visibility_tag(&self) -> String {
        match self.visibility.as_deref() {
            Some(visibility) if !visibility.is_empty() => visibility.to_ascii_lowercase(),
            _ if self.is_private => "private".to_string(),
            _ => "public".to_string(),
        }
    }

    fn clone_url(&self, protocol: Protocol) -> Option<String> {
        match protocol {
            Protocol::Ssh => self.ssh_url.clone(),
            Protocol::Https => self.url.as_ref().map(|url| format!("{}.git", url)),
        }
    }
}

/// Parse the JSON printed by `gh repo list --json ...`.
///
/// Empty output means no repositories.
pub fn parse_repo_list(json: &str, protocol: Protocol) -> Result<Vec<DiscoveryRecord>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    let repos: Vec<GhRepo> = serde_json::from_str(json).map_err(|e| malformed(PROVIDER, e))?;
    repos
        .into_iter()
        .map(|repo| {
            let url = repo.clone_url(protocol).ok_or_else(|| {
                malformed(
                    PROVIDER,
                    format!("repository '{}' has no {} URL", repo.name, protocol),
                )
            })?;
            let tags = vec![repo.visibility_tag(), SOURCE_TAG.to_string()];
            Ok(DiscoveryRecord::new(repo.name, url, tags))
        })
        .collect()
}

/// Lists repositories for the authenticated user or a given owner.
#[derive(Debug, Clone)]
pub struct GitHubProvider {
    pub owner: Option<String>,
    pub protocol: Protocol,
}

impl GitHubProvider {
    pub fn new(owner: Option<String>, protocol: Protocol) -> Self {
        Self { owner, protocol }
    }

    /// Arguments for one `gh repo list` call.
    pub fn list_args(&self, visibility: &str) -> Vec<String> {
        let mut args: Vec<String> = ["repo", "list"].iter().map(|s| s.to_string()).collect();
        if let Some(owner) = &self.owner {
            args.push(owner.clone());
        }
        args.extend(
            ["--json", JSON_FIELDS, "--limit", LIST_LIMIT, "--visibility", visibility]
                .iter()
                .map(|s| s.to_string()),
        );
        args
    }
}

impl Provider for GitHubProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn discover(&self) -> Result<Vec<DiscoveryRecord>> {
        match &self.owner {
            Some(owner) => info!("Fetching repositories from owner '{}'...", owner),
            None => info!("Fetching all repositories for authenticated user..."),
        }

        let mut records = Vec::new();
        for visibility in ["public", "private"] {
            let stdout = run_listing_command(PROVIDER, "gh", &self.list_args(visibility))?;
            let found = parse_repo_list(&stdout, self.protocol)?;
            info!("Found {} {} repositories", found.len(), visibility);
            records.extend(found);
        }

        info!("Total repositories found: {}", records.len());
        Ok(records)
    }
}
