//! # Hollow Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout Hollow. Very few of
//! them ever reach the user: the conversation recovers from every file and
//! voice problem by logging it and falling back to defaults. The types exist
//! so that those log lines carry a precise cause, and so that start-up
//! failures (a broken configuration file) can be reported cleanly.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `HollowError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if chance > 1.0 {
//!     return Err(HollowError::Config("chance above 1".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the Hollow application.
#[derive(Error, Debug)]
pub enum HollowError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Knowledge file '{path}' is invalid: {reason}")]
    KnowledgeFile { path: PathBuf, reason: String },

    #[error("Question bank '{path}' is invalid: {reason}")]
    QuestionBank { path: PathBuf, reason: String },

    #[error("Voice backend '{program}' failed: {reason}")]
    Voice { program: String, reason: String },

    #[error("External command failed: {cmd}, Status: {status}, Output:\n{output}")]
    ExternalCommand {
        cmd: String,
        status: String,
        output: String,
    },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Console I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
