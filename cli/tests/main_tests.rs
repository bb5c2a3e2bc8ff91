//! # Leadbox CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! Top-level behaviour of the `leadbox` binary: standard flags, help output
//! and rejection of unknown commands.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    leadbox_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_command_groups() {
    leadbox_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("contacts"))
        .stdout(predicate::str::contains("newsletter"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_serve_help_shows_options() {
    leadbox_cmd()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--no-cors"));
}

#[test]
fn test_unknown_command_fails() {
    leadbox_cmd()
        .arg("users")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_invalid_port_is_rejected() {
    leadbox_cmd()
        .args(["serve", "--port", "not-a-port"])
        .assert()
        .failure();
}
