//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without requiring network access.

use predicates::prelude::*;

use super::helpers::{deliver_cmd, deliver_cmd_with_project};

#[test]
fn test_help_output() {
    deliver_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deliver"))
        .stdout(predicate::str::contains("items"))
        .stdout(predicate::str::contains("query"));
}

#[test]
fn test_items_help_output() {
    deliver_cmd()
        .args(["items", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--where"))
        .stdout(predicate::str::contains("--project-id"))
        .stdout(predicate::str::contains("--unpublished"))
        .stdout(predicate::str::contains("appended after all --where filters"));
}

#[test]
fn test_invalid_command() {
    deliver_cmd()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_missing_project_id() {
    deliver_cmd()
        .args(["query", "--where", "type=drinks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--project-id"));
}

#[test]
fn test_unknown_field() {
    deliver_cmd_with_project()
        .args(["query", "--where", "colour=red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field"));
}

#[test]
fn test_unknown_operator() {
    deliver_cmd_with_project()
        .args(["query", "--where", "id[bogus]=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognised operator"));
}

#[test]
fn test_filter_without_value() {
    deliver_cmd_with_project()
        .args(["query", "--where", "type"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FIELD=VALUE"));
}

#[test]
fn test_token_field_with_space() {
    deliver_cmd_with_project()
        .args(["query", "--where", "id=1 2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not contain spaces"));
}

#[test]
fn test_invalid_format() {
    deliver_cmd_with_project()
        .args(["query", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_deliver_url() {
    deliver_cmd_with_project()
        .args(["query", "--deliver-url", "ftp://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid client configuration"));
}
