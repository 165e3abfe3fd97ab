//! # Hollow Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by the knowledge store and the
//! question bank. Each call opens, reads or writes, and closes the file; no
//! handle outlives the call.
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing, and rejects paths that exist as files.
//! - **`read_file_to_string`**: `fs::read_to_string` with the path in the error context.
//! - **`write_string_to_file`**: Creates the parent directory when needed, then overwrites the file.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::write_string_to_file(Path::new("data/memoria.json"), "{}")?;
//! let text = io::read_file_to_string(Path::new("data/memoria.json"))?;
//! ```
//!
use crate::core::error::{HollowError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if
/// creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(HollowError::Config(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a specified file path, overwriting if it exists.
///
/// The parent directory is created first when the path has one.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    // A bare file name has an empty parent, which means the working directory.
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}
