//! # Hollow Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the conversation code, kept apart from the
//! domain logic in `chat::` and the infrastructure in `core::`.
//!
//! - **`fs`**: Reading and writing the knowledge and question files.
//! - **`process`**: Running an external program to completion (speech output).
//! - **`ui`**: Console prompts and output.
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Runs external programs and maps their failures into `HollowError`.
pub mod process;
/// Terminal prompts.
pub mod ui;
