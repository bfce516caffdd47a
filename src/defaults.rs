//! Default values for repo-registry.
//!
//! This module centralizes the registry file name, the default remote names
//! used by each command, and the rule that turns a `--target` argument into a
//! registry file path.

use std::path::{Path, PathBuf};

/// File name used when `--target` names a directory.
pub const REGISTRY_FILE_NAME: &str = ".gitopolis.toml";

/// Remote name used for new entries unless overridden.
pub const DEFAULT_REMOTE_NAME: &str = "origin";

/// Remote name used by the Azure DevOps command unless overridden.
pub const AZURE_DEVOPS_REMOTE_NAME: &str = "devops";

/// Resolve a `--target` argument to the registry file path.
///
/// The target is treated as a directory, and [`REGISTRY_FILE_NAME`] is
/// appended, when it is an existing directory or when it does not exist and
/// has no extension. Anything else is used as the file path itself.
pub fn resolve_target(target: &Path) -> PathBuf {
    if target.is_dir() || (!target.exists() && target.extension().is_none()) {
        target.join(REGISTRY_FILE_NAME)
    } else {
        target.to_path_buf()
    }
}
