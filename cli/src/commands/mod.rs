//! # Leadbox Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Top-level command groups of the `leadbox` binary. Each module defines its
//! argument struct and a `handle_*` function that `main.rs` dispatches to.
//!
//! - `serve`: the HTTP backend and admin dashboard
//! - `contacts`: list contact-form submissions
//! - `newsletter`: list newsletter subscribers
//! - `chat`: read chat sessions or send a message from the terminal
//!

/// Chat session history and sending messages from the terminal.
pub mod chat;
/// Listing contact-form submissions.
pub mod contacts;
/// Listing newsletter subscribers.
pub mod newsletter;
/// The HTTP server: API routes, validation and the admin dashboard.
pub mod serve;
