//! Loading and atomically persisting the registry file.
//!
//! [`load`] reads the registry at the start of a run; a missing file is an
//! empty registry. [`persist`] writes the encoded registry to a temporary file
//! in the target's directory, syncs it, and renames it over the target. The
//! target is therefore either left untouched or fully replaced, never
//! truncated in place. The temporary file is removed on every failure path
//! when its handle is dropped.
//!
//! Missing parent directories of the target are created.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::codec;
use crate::error::{Error, Result};
use crate::registry::Registry;

/// Read and decode the registry at `path`.
///
/// # Errors
///
/// Returns `Error::Format` for malformed content and `Error::Io` for read
/// failures other than a missing file.
pub fn load(path: &Path) -> Result<Registry> {
    match fs::read(path) {
        Ok(bytes) => {
            debug!("Loaded {} bytes from {}", bytes.len(), path.display());
            codec::decode(&bytes)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("No registry at {}, starting empty", path.display());
            Ok(Registry::new())
        }
        Err(err) => Err(err.into()),
    }
}

/// Encode `registry` and atomically replace `target` with it.
///
/// # Errors
///
/// Returns `Error::Persist` if the directory cannot be created or the file
/// cannot be written or renamed. The target is unchanged in that case.
pub fn persist(registry: &Registry, target: &Path) -> Result<()> {
    let encoded = codec::encode(registry)?;
    write_atomic(target, &encoded)
}

/// Write `content` to `target` via a temporary sibling file and a rename.
pub fn write_atomic(target: &Path, content: &[u8]) -> Result<()> {
    let dir = parent_dir(target);
    let fail = |message: String| Error::Persist {
        path: target.to_path_buf(),
        message,
    };

    fs::create_dir_all(&dir)
        .map_err(|e| fail(format!("Failed to create directory '{}': {}", dir.display(), e)))?;

    let mut temp = NamedTempFile::new_in(&dir)
        .map_err(|e| fail(format!("Failed to create temporary file: {}", e)))?;
    temp.write_all(content)
        .map_err(|e| fail(format!("Failed to write temporary file: {}", e)))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| fail(format!("Failed to sync temporary file: {}", e)))?;

    // Keep the mode of the file being replaced; new files get 0o644.
    let permissions = match fs::metadata(target) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => default_permissions(),
    };
    if let Some(permissions) = permissions {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| fail(format!("Failed to set permissions: {}", e)))?;
    }

    temp.persist(target)
        .map_err(|e| fail(format!("Failed to replace file: {}", e.error)))?;

    debug!("Wrote {} bytes to {}", content.len(), target.display());
    Ok(())
}

fn parent_dir(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
