//! # Leadbox Contacts Command
//!
//! File: cli/src/commands/contacts.rs
//!
//! ## Overview
//!
//! Inspects contact-form submissions from the terminal, reading the same data
//! directory the server writes to.
//!
//! ```bash
//! leadbox contacts list
//! leadbox contacts list --json
//! leadbox --data-dir ./site-data contacts list
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::store::{Contact, SiteStore};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use tracing::info;

/// # Contacts Command Group Arguments (`ContactsArgs`)
#[derive(Parser, Debug)]
pub struct ContactsArgs {
    #[command(subcommand)]
    command: ContactsCommand,
}

#[derive(Subcommand, Debug)]
enum ContactsCommand {
    /// List all contact submissions, oldest first.
    #[command(alias = "ls")]
    List(ListArgs),
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Print the records as a JSON array instead of a table.
    #[arg(long)]
    json: bool,
}

pub async fn handle_contacts(args: ContactsArgs, config: &Config) -> Result<()> {
    match args.command {
        ContactsCommand::List(list_args) => {
            let store = SiteStore::open(&config.storage)?;
            let contacts = store.list_contacts();
            info!("Listing {} contact(s)", contacts.len());
            if list_args.json {
                let json = serde_json::to_string_pretty(&contacts)
                    .context("Failed to serialize contacts")?;
                println!("{}", json);
            } else {
                print!("{}", format_contact_table(&contacts));
            }
        }
    }
    Ok(())
}

fn format_contact_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts yet.\n".to_string();
    }

    let name_width = contacts
        .iter()
        .map(|c| c.first_name.len() + c.last_name.len() + 1)
        .max()
        .unwrap_or(4)
        .clamp(4, 30);
    let email_width = contacts
        .iter()
        .map(|c| c.email.len())
        .max()
        .unwrap_or(5)
        .clamp(5, 40);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4} | {:<nw$} | {:<ew$} | {:<16} | Submitted",
        "#",
        "Name",
        "Email",
        "Service",
        nw = name_width,
        ew = email_width
    );
    let _ = writeln!(
        out,
        "{:-<4}-+-{:-<nw$}-+-{:-<ew$}-+-{:-<16}-+-{:-<20}",
        "",
        "",
        "",
        "",
        "",
        nw = name_width,
        ew = email_width
    );
    for contact in contacts {
        let _ = writeln!(
            out,
            "{:>4} | {:<nw$} | {:<ew$} | {:<16} | {}",
            contact.id,
            format!("{} {}", contact.first_name, contact.last_name),
            contact.email,
            contact.service.as_deref().unwrap_or("-"),
            contact.created_at.format("%Y-%m-%d %H:%M"),
            nw = name_width,
            ew = email_width
        );
    }
    let _ = writeln!(out, "\n{} contact(s).", contacts.len());
    out
}
