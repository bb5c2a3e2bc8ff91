//! # Leadbox Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces used by every command:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//! - `templating`: Server-side HTML rendering (admin dashboard)
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{LeadboxError, Result}; // For error handling
//! use crate::core::templating; // For rendering HTML pages
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
