//! Repository listing collaborators
//!
//! Providers turn a source-control host's repository listing into
//! [`DiscoveryRecord`]s. Visibility tagging and protocol selection live here,
//! not in the reconciler, which only unions whatever tags it receives.
//!
//! - [`github::GitHubProvider`] runs `gh repo list`.
//! - [`azure_devops::AzureDevOpsProvider`] runs `az devops invoke`.
//! - [`file::FileProvider`] reads a JSON array of records.
//!
//! Each provider keeps output parsing in a plain function so it can be tested
//! without the external CLI installed.

pub mod azure_devops;
pub mod file;
pub mod github;

use std::fmt;
use std::process::Command;
use std::str::FromStr;

use log::{debug, info};

use crate::discovery::DiscoveryRecord;
use crate::error::{Error, Result};

/// A source of discovery records.
pub trait Provider {
    /// Short identifier used in logs and error messages.
    fn name(&self) -> &str;

    /// List the repositories this provider knows about.
    fn discover(&self) -> Result<Vec<DiscoveryRecord>>;
}

/// Which clone URL a provider should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Ssh,
    Https,
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ssh" => Ok(Protocol::Ssh),
            "https" => Ok(Protocol::Https),
            other => Err(format!(
                "unknown protocol '{}', expected 'ssh' or 'https'",
                other
            )),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Ssh => f.write_str("ssh"),
            Protocol::Https => f.write_str("https"),
        }
    }
}

/// Run an external listing command and return its stdout.
///
/// This uses the system binary, so whatever authentication the user has set
/// up for that CLI applies.
pub(crate) fn run_listing_command(provider: &str, program: &str, args: &[String]) -> Result<String> {
    info!("Running command: {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| Error::Provider {
            provider: provider.to_string(),
            message: format!("Failed to run '{}': {}", program, e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Provider {
            provider: provider.to_string(),
            message: format!("'{}' exited with {}: {}", program, output.status, stderr.trim()),
        });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| Error::Provider {
        provider: provider.to_string(),
        message: format!("'{}' produced output that is not valid UTF-8", program),
    })?;
    debug!("{} returned {} bytes", program, stdout.len());
    Ok(stdout)
}

/// Build a provider error for unusable listing output.
pub(crate) fn malformed(provider: &str, err: impl fmt::Display) -> Error {
    Error::Provider {
        provider: provider.to_string(),
        message: format!("Unexpected listing output: {}", err),
    }
}
