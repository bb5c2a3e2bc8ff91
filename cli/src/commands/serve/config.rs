//! # Leadbox Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//!
//! ## Overview
//!
//! Resolves the effective settings for `leadbox serve`. Command-line flags
//! override the `[server]` table of the loaded configuration; anything not
//! given on the command line comes from the configuration files or their
//! defaults.
//!
//! ```bash
//! # Listen on all interfaces, port 8080, without CORS headers
//! leadbox serve --host 0.0.0.0 --port 8080 --no-cors
//! ```
//!
use crate::core::config::{Config, StorageConfig};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};

/// # Serve Command Arguments (`ServeArgs`)
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Port to listen on. Overrides `server.port` (default 5000).
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Address to bind. Overrides `server.host` (default 127.0.0.1).
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Do not send CORS headers.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Server Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    pub storage: StorageConfig,
}

impl ServerConfig {
    pub fn resolve(args: &ServeArgs, config: &Config) -> Self {
        Self {
            host: args.host.unwrap_or(config.server.host),
            port: args.port.unwrap_or(config.server.port),
            enable_cors: config.server.enable_cors && !args.no_cors,
            storage: config.storage.clone(),
        }
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
