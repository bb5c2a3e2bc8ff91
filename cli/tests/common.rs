//! # Leadbox CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and runs the compiled `leadbox` binary through
//! `assert_cmd`.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get Leadbox Command (`leadbox_cmd`)
///
/// An `assert_cmd::Command` for the `leadbox` binary built for this test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn leadbox_cmd() -> Command {
    Command::cargo_bin("leadbox").expect("Failed to find leadbox binary for testing")
}

/// A `leadbox` command isolated inside `sandbox`: it runs there, reads no
/// user configuration and stores its tables in `sandbox/data`.
pub fn sandboxed_cmd(sandbox: &Path) -> Command {
    let mut cmd = leadbox_cmd();
    cmd.current_dir(sandbox)
        .env("XDG_CONFIG_HOME", sandbox.join("config-home"))
        .env("HOME", sandbox)
        .env_remove("LEADBOX_DATA_DIR")
        .arg("--data-dir")
        .arg(sandbox.join("data"));
    cmd
}
