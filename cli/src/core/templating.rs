//! # Leadbox Templating Utilities
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Renders HTML pages from Tera templates compiled into the binary. Any
//! `Serialize` value can be the template context; its fields become template
//! variables. Autoescaping is on, so visitor-supplied text is HTML-escaped.
//!
//! ```rust
//! let html = templating::render_page(DASHBOARD_TEMPLATE, &summary)?;
//! ```
//!
use crate::core::error::{LeadboxError, Result};
use anyhow::anyhow;
use serde::Serialize;
use tera::Tera;
use tracing::debug;

/// Renders `template` with the fields of `data` as variables.
pub fn render_page<T: Serialize>(template: &str, data: &T) -> Result<String> {
    let context = tera::Context::from_serialize(data).map_err(|e| {
        anyhow!(LeadboxError::Template { source: e }).context("Failed to build template context")
    })?;
    let rendered = Tera::one_off(template, &context, true).map_err(|e| {
        anyhow!(LeadboxError::Template { source: e }).context("Template rendering failed")
    })?;
    debug!("Rendered page ({} bytes)", rendered.len());
    Ok(rendered)
}
