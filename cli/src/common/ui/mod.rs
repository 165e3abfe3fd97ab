//! # Hollow UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction helpers. Today this is only `prompts`, the blocking
//! line reader/printer the conversation loop talks through.
//!

/// Blocking line prompts and output (`Console`).
pub mod prompts;
