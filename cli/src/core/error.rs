//! # Leadbox Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types shared across the Leadbox application.
//! Most functions return `Result<T>` (an alias for `anyhow::Result<T>`) so that
//! context can be attached freely; conditions a caller needs to tell apart are
//! raised as a `LeadboxError` inside the `anyhow::Error` and recovered with
//! `downcast_ref`.
//!
//! "Not found" and "empty store" are never errors: lookups return `Option`
//! and reads of a missing or unreadable table return an empty list. The only
//! storage failure that surfaces is a failed rewrite (`StorageWrite`).
//!
//! ## Examples
//!
//! ```rust
//! match store.create_contact(input) {
//!     Ok(contact) => println!("Saved contact #{}", contact.id),
//!     Err(e) if e.downcast_ref::<LeadboxError>().is_some_and(|le| matches!(le, LeadboxError::StorageWrite { .. })) => {
//!         eprintln!("Disk problem: {e:#}");
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Leadbox application.
#[derive(Error, Debug)]
pub enum LeadboxError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rewriting a record table failed (disk full, permission denied, ...).
    #[error("Failed to write records to '{path}': {source}")]
    StorageWrite {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = LeadboxError::Config("Missing setting 'port'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'port'"
        );

        let write_err = LeadboxError::StorageWrite {
            path: "data/contacts.csv".into(),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            )),
        };
        assert_eq!(
            write_err.to_string(),
            "Failed to write records to 'data/contacts.csv': read-only filesystem"
        );
    }

    #[test]
    fn test_storage_write_is_recoverable_from_anyhow() {
        let err: anyhow::Error = LeadboxError::StorageWrite {
            path: "x.csv".into(),
            source: "boom".into(),
        }
        .into();
        assert!(matches!(
            err.downcast_ref::<LeadboxError>(),
            Some(LeadboxError::StorageWrite { .. })
        ));
    }
}
