//! # Hollow Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that the
//! conversation code builds on:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Rendering of the follow-up question templates
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{HollowError, Result}; // For error handling
//! use crate::core::templating; // For rendering question templates
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
