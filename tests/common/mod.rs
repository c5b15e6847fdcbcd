//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Binary invocation with a clean working directory
//! - Config fixture creation

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// relevel binary, run inside `dir` with logging silenced
pub fn bin_in(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_relevel"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

/// Empty project directory (no .relevel.toml)
pub fn empty_project() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Project directory with the given .relevel.toml contents
pub fn project_with_config(contents: &str) -> TempDir {
    let dir = empty_project();
    fs::write(dir.path().join(".relevel.toml"), contents).expect("Failed to write config");
    dir
}

/// Parse stdout as one JSON document
pub fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8");
    serde_json::from_str(stdout.trim())
        .unwrap_or_else(|e| panic!("stdout should be JSON ({}): {}", e, stdout))
}
