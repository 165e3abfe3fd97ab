//! # Hollow CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behavior of the `hollow` binary: standard flags, clean exits,
//! and start-up errors.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    hollow_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--memory").and(predicate::str::contains("--mute")));
}

#[test]
fn test_version_flag() {
    hollow_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_exit_word_exits_cleanly() {
    let dir = tempdir().unwrap();
    hollow_in(dir.path())
        .write_stdin("Bye\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Hollow started!")
                .and(predicate::str::contains("AI: See you later!")),
        );
    assert!(!memory_path(dir.path()).exists());
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let dir = tempdir().unwrap();
    hollow_in(dir.path()).write_stdin("").assert().success();
}

#[test]
fn test_invalid_utf8_input_keeps_session_alive() {
    let dir = tempdir().unwrap();
    hollow_in(dir.path())
        .write_stdin(b"\xff\xfe hi\n\nexit\n".to_vec())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("I don't know how to answer that")
                .and(predicate::str::contains("AI: See you later!")),
        );
}

#[test]
fn test_invalid_project_config_fails_at_startup() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(
        dir.path().join(".hollow.toml"),
        "[conversation]\nrandom_question_chance = 3.0\n",
    )
    .unwrap();

    hollow_in(dir.path())
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("random_question_chance"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_user_config_comes_from_isolated_home() {
    let dir = tempdir().unwrap();
    let config_dir = user_config_home(dir.path()).join("hollow");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[conversation]\nrandom_question_chance = -1.0\n",
    )
    .unwrap();

    hollow_in(dir.path())
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("random_question_chance"));
}
