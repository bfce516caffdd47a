//! Azure DevOps provider backed by the `az` CLI.
//!
//! `az devops invoke` is used instead of `az repos list` because it returns
//! every repository of the organization in one response. Repositories are
//! tagged `azure-devops` plus their project name with spaces replaced by
//! hyphens.

use log::info;
use serde::Deserialize;

use super::{malformed, run_listing_command, Protocol, Provider};
use crate::discovery::DiscoveryRecord;
use crate::error::Result;

const PROVIDER: &str = "azure-devops";
const SOURCE_TAG: &str = "azure-devops";
const API_VERSION: &str = "7.0";

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(default)]
    value: Vec<AzRepo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AzRepo {
    name: String,
    #[serde(default)]
    remote_url: Option<String>,
    #[serde(default)]
    web_url: Option<String>,
    #[serde(default)]
    ssh_url: Option<String>,
    #[serde(default)]
    project: Option<AzProject>,
}

#[derive(Debug, Deserialize)]
struct AzProject {
    name: Option<String>,
}

impl AzRepo {
    fn project_name(&self) -> Option<&str> {
        self.project.as_ref().and_then(|p| p.name.as_deref())
    }

    fn clone_url(&self, protocol: Protocol) -> Option<String> {
        let https = || self.remote_url.clone().or_else(|| self.web_url.clone());
        match protocol {
            Protocol::Ssh => self.ssh_url.clone().or_else(https),
            Protocol::Https => https(),
        }
    }

    fn tags(&self) -> Vec<String> {
        let mut tags = vec![SOURCE_TAG.to_string()];
        if let Some(project) = self.project_name().filter(|p| !p.is_empty()) {
            tags.push(project.replace(' ', "-"));
        }
        tags
    }
}

/// Parse the JSON printed by `az devops invoke --area git --resource repositories`.
///
/// When `project` is given, only repositories of that project are returned.
pub fn parse_repositories(
    json: &str,
    protocol: Protocol,
    project: Option<&str>,
) -> Result<Vec<DiscoveryRecord>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    let listing: Listing = serde_json::from_str(json).map_err(|e| malformed(PROVIDER, e))?;
    listing
        .value
        .into_iter()
        .filter(|repo| project.map_or(true, |wanted| repo.project_name() == Some(wanted)))
        .map(|repo| {
            let url = repo.clone_url(protocol).ok_or_else(|| {
                malformed(PROVIDER, format!("repository '{}' has no clone URL", repo.name))
            })?;
            let tags = repo.tags();
            Ok(DiscoveryRecord::new(repo.name, url, tags))
        })
        .collect()
}

/// Lists repositories of an Azure DevOps organization.
#[derive(Debug, Clone)]
pub struct AzureDevOpsProvider {
    pub organization: String,
    pub project: Option<String>,
    pub protocol: Protocol,
}

impl AzureDevOpsProvider {
    pub fn new(organization: impl Into<String>, project: Option<String>, protocol: Protocol) -> Self {
        Self {
            organization: organization.into(),
            project,
            protocol,
        }
    }

    pub fn organization_url(&self) -> String {
        format!("https://dev.azure.com/{}", self.organization)
    }

    /// Arguments for the `az devops invoke` call.
    pub fn invoke_args(&self) -> Vec<String> {
        let org = self.organization_url();
        [
            "devops",
            "invoke",
            "--area",
            "git",
            "--resource",
            "repositories",
            "--org",
            org.as_str(),
            "--api-version",
            API_VERSION,
            "--output",
            "json",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

impl Provider for AzureDevOpsProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn discover(&self) -> Result<Vec<DiscoveryRecord>> {
        info!(
            "Fetching repositories from organization '{}'...",
            self.organization
        );
        if let Some(project) = &self.project {
            info!("Filtering to project '{}'", project);
        }

        let stdout = run_listing_command(PROVIDER, "az", &self.invoke_args())?;
        let records = parse_repositories(&stdout, self.protocol, self.project.as_deref())?;

        info!("Found {} repositories", records.len());
        Ok(records)
    }
}
