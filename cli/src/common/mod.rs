//! # Leadbox Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! Shared helpers used by the store and the commands. Only filesystem
//! utilities live here at present.
//!

/// Directory handling and CSV table I/O.
pub mod fs;
