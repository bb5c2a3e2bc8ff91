//! # Leadbox Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the `leadbox` binary, the backend of a marketing website.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and applying the global `--data-dir` override
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Run the site backend
//! leadbox serve
//!
//! # Inspect what visitors have submitted
//! leadbox -v contacts list
//! leadbox --data-dir ./site-data newsletter list --json
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod chat; // Chat widget flow and the canned responder
mod commands; // Command handlers (serve, contacts, newsletter, chat)
mod common; // Shared filesystem and table helpers
mod core; // Core infrastructure (errors, config, templating)
mod store; // File-backed record tables

#[derive(Parser, Debug)]
#[command(
    name = "leadbox",
    about = "📬 Leadbox: contact form, newsletter and chat backend for a marketing site",
    long_about = "Serves the site's JSON API and admin dashboard, storing contacts, newsletter \n\
                  subscriptions and chat messages as tables in a data directory.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Directory holding the record tables. Overrides `storage.data_dir`.
    #[arg(long, global = true, env = "LEADBOX_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    Contacts(commands::contacts::ContactsArgs),
    Newsletter(commands::newsletter::NewsletterArgs),
    Chat(commands::chat::ChatArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = run(cli).await;

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Loads configuration, applies `--data-dir` and dispatches to the command handler.
async fn run(cli: Cli) -> crate::core::error::Result<()> {
    let config = crate::core::config::load_config(cli.data_dir)?;
    match cli.command {
        Commands::Serve(args) => commands::serve::handle_serve(args, config).await,
        Commands::Contacts(args) => commands::contacts::handle_contacts(args, &config).await,
        Commands::Newsletter(args) => commands::newsletter::handle_newsletter(args, &config).await,
        Commands::Chat(args) => commands::chat::handle_chat(args, &config).await,
    }
}
