//! # Assistente CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behavior of the `assistente` binary: `--help`, `--version`, and
//! rejection of unknown subcommands.
//!
mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    assistente_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("srv"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("categories"));
}

#[test]
fn test_version_flag() {
    assistente_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    assistente_cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_missing_subcommand_fails() {
    assistente_cmd().assert().failure();
}
