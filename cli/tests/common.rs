//! # Hollow Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs
//! the compiled `hollow` binary inside its own temporary directory, muted,
//! with a fixed seed and explicit knowledge/question file paths, so neither
//! the developer's config nor their speakers get involved.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// An `assert_cmd::Command` for the compiled `hollow` binary.
pub fn hollow_cmd() -> Command {
    Command::cargo_bin("hollow").expect("Failed to find hollow binary for testing")
}

/// `hollow` configured to run in `dir` with files under it. `HOME` and
/// `XDG_CONFIG_HOME` point into `dir` so no real user config is read.
pub fn hollow_in(dir: &Path) -> Command {
    let mut cmd = hollow_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", user_config_home(dir))
        .env_remove("RUST_LOG")
        .env_remove("HOLLOW_MEMORY_FILE")
        .env_remove("HOLLOW_QUESTIONS_FILE")
        .arg("--mute")
        .args(["--seed", "1"])
        .arg("--memory")
        .arg(memory_path(dir))
        .arg("--questions")
        .arg(questions_path(dir));
    cmd
}

/// The config home `hollow_in` hands to the binary.
pub fn user_config_home(dir: &Path) -> PathBuf {
    dir.join(".config")
}

pub fn memory_path(dir: &Path) -> PathBuf {
    dir.join("memoria.json")
}

pub fn questions_path(dir: &Path) -> PathBuf {
    dir.join("perguntas.json")
}

/// Parses the knowledge file written by a run.
pub fn read_memory(dir: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(memory_path(dir)).expect("knowledge file was not written");
    serde_json::from_str(&text).expect("knowledge file is not valid JSON")
}
