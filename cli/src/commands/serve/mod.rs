//! # Leadbox Site Server
//!
//! File: cli/src/commands/serve/mod.rs
//!
//! ## Overview
//!
//! `leadbox serve` runs the HTTP backend of the marketing site: the contact
//! form, newsletter sign-up and chat widget endpoints under `/api`, plus the
//! admin dashboard at `/admin`.
//!
//! ## Architecture
//!
//! - `config.rs`: resolves listen address and CORS from flags and config files
//! - `server_logic.rs`: router construction and the server loop
//! - `handlers.rs`: JSON API handlers and shared state
//! - `validation.rs`: request body checks
//! - `dashboard.rs`: the HTML admin page
//!
//! ```bash
//! leadbox serve
//! leadbox serve --port 8080 --host 0.0.0.0
//! leadbox --data-dir ./site-data serve --no-cors
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::store::SiteStore;
use tracing::info;

pub use config::ServeArgs;

pub mod config;
pub mod dashboard;
pub mod handlers;
pub mod server_logic;
pub mod validation;

/// # Handle Serve Command (`handle_serve`)
///
/// Resolves the server settings, opens the data directory (creating it when
/// absent) and runs the server until shutdown.
pub async fn handle_serve(args: ServeArgs, config: Config) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let server_config = config::ServerConfig::resolve(&args, &config);
    info!("Effective server config: {:?}", server_config);

    let store = SiteStore::open(&server_config.storage)?;
    server_logic::run_server(server_config, store).await
}
