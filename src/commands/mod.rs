//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `repo-registry` command-line tool, one file per command.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments, derived
//!   using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `repo_registry` library.
//!
//! The discovery commands (`github`, `azure-devops`, `import`) share their
//! registry options and reconcile-and-report flow through `sync`.

pub mod azure_devops;
pub mod github;
pub mod import;
pub mod list;
pub mod sync;
