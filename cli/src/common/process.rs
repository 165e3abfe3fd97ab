//! # Hollow Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs an external program to completion and maps failures into
//! `HollowError`. The voice backend is the only caller: it hands the text to
//! a speech program and waits for playback to finish before the turn goes on.
//!
//! Standard output of the child is discarded; standard error is captured so
//! that a failure can be logged with the program's own message.
//!
use crate::core::error::{HollowError, Result};
use anyhow::Context;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs `program` with `args` and blocks until it exits.
///
/// # Errors
///
/// Returns an `Err` if the program cannot be spawned, or
/// `HollowError::ExternalCommand` if it exits with a non-zero status.
pub fn run_command_blocking(program: &str, args: &[String]) -> Result<()> {
    debug!("Running external command: {} {:?}", program, args);
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("Failed to spawn '{}'", program))?;

    if !output.status.success() {
        anyhow::bail!(HollowError::ExternalCommand {
            cmd: program.to_string(),
            status: output.status.to_string(),
            output: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_success() {
        assert!(run_command_blocking("true", &[]).is_ok());
    }

    #[test]
    fn test_run_command_nonzero_status() {
        let err = run_command_blocking("false", &[]).unwrap_err();
        assert!(err.to_string().contains("External command failed: false"));
    }

    #[test]
    fn test_run_command_missing_program() {
        let err = run_command_blocking("hollow-no-such-program", &[]).unwrap_err();
        assert!(err.to_string().contains("Failed to spawn"));
    }
}
