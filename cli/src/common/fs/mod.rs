//! # Leadbox Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! - **`io`**: directory creation and checks (`ensure_dir_exists`).
//! - **`table`**: reading and writing a whole record table as one CSV file
//!   with a fixed header row. Used by `store::RecordStore`.
//!
//! Import from the submodule directly, e.g. `crate::common::fs::table::read_table`.
//!

pub mod io;
pub mod table;
