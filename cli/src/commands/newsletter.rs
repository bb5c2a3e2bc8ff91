//! # Leadbox Newsletter Command
//!
//! File: cli/src/commands/newsletter.rs
//!
//! Lists newsletter subscribers from the data directory.
//!
//! ```bash
//! leadbox newsletter list
//! leadbox newsletter list --json
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::store::{NewsletterSubscription, SiteStore};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use tracing::info;

#[derive(Parser, Debug)]
pub struct NewsletterArgs {
    #[command(subcommand)]
    command: NewsletterCommand,
}

#[derive(Subcommand, Debug)]
enum NewsletterCommand {
    /// List all subscribers, oldest first.
    #[command(alias = "ls")]
    List(ListArgs),
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Print the records as a JSON array instead of a table.
    #[arg(long)]
    json: bool,
}

pub async fn handle_newsletter(args: NewsletterArgs, config: &Config) -> Result<()> {
    match args.command {
        NewsletterCommand::List(list_args) => {
            let store = SiteStore::open(&config.storage)?;
            let subscribers = store.list_subscribers();
            info!("Listing {} subscriber(s)", subscribers.len());
            if list_args.json {
                let json = serde_json::to_string_pretty(&subscribers)
                    .context("Failed to serialize newsletter subscribers")?;
                println!("{}", json);
            } else {
                print!("{}", format_subscriber_table(&subscribers));
            }
        }
    }
    Ok(())
}

fn format_subscriber_table(subscribers: &[NewsletterSubscription]) -> String {
    if subscribers.is_empty() {
        return "No newsletter subscribers yet.\n".to_string();
    }

    let email_width = subscribers
        .iter()
        .map(|s| s.email.len())
        .max()
        .unwrap_or(5)
        .clamp(5, 40);

    let mut out = String::new();
    let _ = writeln!(out, "{:>4} | {:<w$} | {:<10} | Since", "#", "Email", "Status", w = email_width);
    let _ = writeln!(out, "{:-<4}-+-{:-<w$}-+-{:-<10}-+-{:-<16}", "", "", "", "", w = email_width);
    for subscriber in subscribers {
        let _ = writeln!(
            out,
            "{:>4} | {:<w$} | {:<10} | {}",
            subscriber.id,
            subscriber.email,
            if subscriber.subscribed { "active" } else { "inactive" },
            subscriber.created_at.format("%Y-%m-%d %H:%M"),
            w = email_width
        );
    }
    let _ = writeln!(out, "\n{} subscriber(s).", subscribers.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_subscriber_table() {
        let subscribers = vec![
            NewsletterSubscription {
                id: 1,
                email: "a@example.com".into(),
                subscribed: true,
                created_at: Utc::now(),
            },
            NewsletterSubscription {
                id: 2,
                email: "b@example.com".into(),
                subscribed: false,
                created_at: Utc::now(),
            },
        ];

        let table = format_subscriber_table(&subscribers);

        assert!(table.contains("a@example.com"));
        assert!(table.contains("inactive"));
        assert!(table.ends_with("2 subscriber(s).\n"));
        assert_eq!(format_subscriber_table(&[]), "No newsletter subscribers yet.\n");
    }
}
