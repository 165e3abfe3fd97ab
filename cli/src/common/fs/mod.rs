//! # Hollow Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the knowledge store and the question bank.
//! Callers import the submodule directly, e.g.
//! `use crate::common::fs::io::write_string_to_file;`.
//!

/// Contains basic file I/O operations (`ensure_dir_exists`, `read_file_to_string`, `write_string_to_file`).
pub mod io;
