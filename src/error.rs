//! # Error Handling
//!
//! This module defines the centralized error type for `repo-registry`. It uses
//! the `thiserror` library to describe every failure mode of a reconciliation
//! run with enough context to report it to the user.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failures that can occur within the library.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! A run is all-or-nothing, so every variant means "nothing was written":
//!
//! - `Format`: the existing registry file is malformed.
//! - `InvalidRecord`: a discovered repository failed validation.
//! - `Io` / `Persist`: a read or write failed at the storage boundary.
//! - `Provider`: a listing collaborator failed or returned unusable output.
//! - `Json`: a record file could not be parsed.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for repo-registry operations
#[derive(Error, Debug)]
pub enum Error {
    /// The registry text is not well-formed TOML or violates the registry schema.
    ///
    /// Includes an optional hint about how to fix the file.
    #[error("Registry format error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Format {
        message: String,
        /// Optional hint for how to fix the registry file
        hint: Option<String>,
    },

    /// A discovery record was rejected before reconciliation started.
    #[error("Invalid discovery record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    /// Writing the registry to its final location failed.
    #[error("Failed to persist registry to '{}': {message}", path.display())]
    Persist { path: PathBuf, message: String },

    /// A repository listing collaborator failed.
    #[error("Provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing error, wrapped from `serde_json::Error`.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Convenience constructor for schema violations without a hint.
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Error::Format {
            message: message.into(),
            hint: None,
        }
    }

    pub(crate) fn invalid_record(name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidRecord {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
