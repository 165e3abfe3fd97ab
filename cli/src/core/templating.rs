//! # Hollow Template System
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Follow-up questions are written as small Tera templates such as
//! `"Tell me more about {{ topic }}?"`. This module renders one of them
//! against a context built from a string map.
//!
//! Auto-escaping is off: the output goes to a terminal and a speech program,
//! never to HTML, and the topic must appear exactly as the user typed it.
//!
//! ## Examples
//!
//! ```rust
//! let mut context = HashMap::new();
//! context.insert("topic".to_string(), "turtles".to_string());
//! let text = templating::render_template("Why {{ topic }}?", &context)?;
//! assert_eq!(text, "Why turtles?");
//! ```
//!
use crate::core::error::{HollowError, Result};
use anyhow::anyhow;
use std::collections::HashMap;
use tera::Tera;
use tracing::debug;

/// Renders a single inline template with the given variables.
pub fn render_template(template: &str, context_map: &HashMap<String, String>) -> Result<String> {
    let tera_context = tera::Context::from_serialize(context_map).map_err(|e| {
        anyhow!(HollowError::Template { source: e })
            .context("Failed to create Tera context from map")
    })?;
    let rendered = Tera::one_off(template, &tera_context, false).map_err(|e| {
        anyhow!(HollowError::Template { source: e })
            .context(format!("Tera rendering failed for template '{}'", template))
    })?;
    debug!("Rendered template '{}' -> '{}'", template, rendered);
    Ok(rendered)
}
