//! End-to-end tests for CLI exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: Any failure; the registry file is left as it was
//! - Exit code 2: Invalid command-line usage (handled by clap)

mod common;
use common::prelude::*;

/// Exit code 0 is returned for a successful import.
#[test]
fn test_exit_code_success() {
    let fixture = TestFixture::new().with_records(records::TWO_PUBLIC);
    fixture.import().assert().code(0);
}

/// Exit code 0 is returned for --help.
#[test]
fn test_exit_code_help() {
    let mut cmd = cargo_bin_cmd!("repo-registry");
    cmd.arg("--help").assert().code(0);
}

/// Exit code 0 is returned for --version.
#[test]
fn test_exit_code_version() {
    let mut cmd = cargo_bin_cmd!("repo-registry");
    cmd.arg("--version").assert().code(0);
}

/// Exit code 1 is returned when the record file does not exist.
#[test]
fn test_exit_code_error_records_not_found() {
    let fixture = TestFixture::new();

    fixture
        .import()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No such file or directory"));
}

/// Exit code 1 is returned for a record file that is not a JSON array.
#[test]
fn test_exit_code_error_malformed_records() {
    let fixture = TestFixture::new().with_records(records::NOT_AN_ARRAY);

    fixture
        .import()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON parsing error"));
}

/// Exit code 1 is returned for an invalid discovery record.
#[test]
fn test_exit_code_error_invalid_record() {
    let fixture = TestFixture::new().with_records(records::WITH_NAMELESS);

    fixture.import().assert().code(1);
    assert!(!fixture.registry_path().exists());
}

/// Exit code 1 is returned for a malformed registry.
#[test]
fn test_exit_code_error_malformed_registry() {
    let fixture = TestFixture::new()
        .with_registry("[repos\n")
        .with_records(records::TWO_PUBLIC);

    fixture.import().assert().code(1);
    assert_eq!(fixture.registry(), "[repos\n");
}

/// Exit code 2 is returned for an unknown subcommand.
#[test]
fn test_exit_code_unknown_subcommand() {
    let mut cmd = cargo_bin_cmd!("repo-registry");
    cmd.arg("nonexistent-command").assert().code(2);
}

/// Exit code 2 is returned when the target is missing.
#[test]
fn test_exit_code_missing_target() {
    let fixture = TestFixture::new().with_records(records::TWO_PUBLIC);

    fixture
        .command()
        .arg("import")
        .arg("--file")
        .arg(fixture.records_path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--target"));
}

/// Exit code 2 is returned for an unknown protocol.
#[test]
fn test_exit_code_invalid_protocol() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("github")
        .arg("--target")
        .arg(fixture.path())
        .arg("--protocol")
        .arg("ftp")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

/// Exit code 2 is returned for an empty remote name.
#[test]
fn test_exit_code_empty_remote_name() {
    let fixture = TestFixture::new().with_records(records::TWO_PUBLIC);

    fixture
        .import()
        .arg("--remote-name")
        .arg("")
        .assert()
        .code(2);
}

/// Exit code 2 is returned when azure-devops lacks an organization.
#[test]
fn test_exit_code_azure_devops_requires_organization() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("azure-devops")
        .arg("--target")
        .arg(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--organization"));
}
