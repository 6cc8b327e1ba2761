//! # Assistente CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file is
//! compiled as its own crate and runs the real `assistente` binary.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use tempfile::TempDir;

/// # Get Assistente Command (`assistente_cmd`)
///
/// An `assert_cmd::Command` for the `assistente` binary built for this test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn assistente_cmd() -> Command {
    Command::cargo_bin("assistente").expect("Failed to find assistente binary for testing")
}

/// A command running inside a fresh empty directory, so no `.assistente.toml`
/// from the developer's checkout is picked up. Keep the `TempDir` alive for the
/// duration of the test.
pub fn isolated_cmd() -> (Command, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // Stops the upward config search inside the temp dir.
    std::fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    let mut cmd = assistente_cmd();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    (cmd, dir)
}

/// Small two-category table used by several tests.
pub const CAMPUS_TABLE: &str = r#"
[[category]]
key = "biblioteca"
patterns = ['\b(livro|livros|biblioteca)\b']
responses = ["A biblioteca abre às 8h."]

[[category]]
key = "outro"
fallback = true
responses = ["Pode repetir?"]
"#;
