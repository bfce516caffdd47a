//! Shared test utilities for E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_records(records::TWO_PUBLIC);
//!     fixture.import().assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{records, registries};
    pub use super::TestFixture;
}

/// Discovery record files in the JSON form accepted by `import`.
#[allow(dead_code)]
pub mod records {
    /// Two public GitHub repositories.
    pub const TWO_PUBLIC: &str = r#"[
  {"name": "foo", "url": "git@github.com:me/foo.git", "tags": ["public", "github"]},
  {"name": "bar", "url": "git@github.com:me/bar.git", "tags": ["public", "github"]}
]"#;

    /// The `foo` repository as seen by Azure DevOps.
    pub const FOO_ON_AZURE: &str = r#"[
  {"name": "foo", "url": "https://dev.azure.com/org/Apps/_git/foo", "tags": ["azure-devops", "Apps"]}
]"#;

    /// A batch whose last record has an empty name.
    pub const WITH_NAMELESS: &str = r#"[
  {"name": "baz", "url": "git@github.com:me/baz.git", "tags": ["public"]},
  {"name": "", "url": "git@github.com:me/nameless.git", "tags": ["public"]}
]"#;

    /// Valid JSON that is not a record array.
    pub const NOT_AN_ARRAY: &str = r#"{"name": "foo"}"#;
}

/// Registry files in gitopolis layout.
#[allow(dead_code)]
pub mod registries {
    /// One repository with one remote and tags.
    pub const FOO_ORIGIN: &str = r#"[repos.foo]
tags = ["public", "github"]

[repos.foo.remotes]
origin = "git@github.com:me/foo.git"
"#;

    /// A remote whose value is not a string.
    pub const MALFORMED: &str = "[repos.foo.remotes]\norigin = 42\n";
}

/// A temporary directory holding a registry and a record file.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `records.json` with the given content.
    pub fn with_records(self, content: &str) -> Self {
        self.temp_dir
            .child("records.json")
            .write_str(content)
            .expect("Failed to write records file");
        self
    }

    /// Write `.gitopolis.toml` with the given content.
    #[allow(dead_code)]
    pub fn with_registry(self, content: &str) -> Self {
        self.temp_dir
            .child(".gitopolis.toml")
            .write_str(content)
            .expect("Failed to write registry file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the registry file.
    pub fn registry_path(&self) -> PathBuf {
        self.temp_dir.path().join(".gitopolis.toml")
    }

    /// Get the path to the records file.
    pub fn records_path(&self) -> PathBuf {
        self.temp_dir.path().join("records.json")
    }

    /// Read the registry file.
    #[allow(dead_code)]
    pub fn registry(&self) -> String {
        std::fs::read_to_string(self.registry_path()).expect("Failed to read registry file")
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("repo-registry");
        cmd.current_dir(self.path())
            .env_remove("REPO_REGISTRY_TARGET")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }

    /// An `import` of `records.json` into this fixture's directory.
    #[allow(dead_code)]
    pub fn import(&self) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("import")
            .arg("--file")
            .arg(self.records_path())
            .arg("--target")
            .arg(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_with_records() {
        let fixture = TestFixture::new().with_records(records::TWO_PUBLIC);
        assert!(fixture.records_path().exists());
    }

    #[test]
    fn test_record_constants_are_valid_json() {
        for content in [records::TWO_PUBLIC, records::FOO_ON_AZURE, records::WITH_NAMELESS] {
            serde_json::from_str::<serde_json::Value>(content).expect("Records should be valid JSON");
        }
    }
}
