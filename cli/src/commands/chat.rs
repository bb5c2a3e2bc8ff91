//! # Leadbox Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! Reads chat sessions and drives the chat widget from the terminal. `send`
//! goes through the same exchange as `POST /api/chat`, so the message and its
//! reply are stored and count towards the session's history.
//!
//! ```bash
//! leadbox chat send visitor-42 "How much does a chatbot cost?"
//! leadbox chat history visitor-42
//! ```
//!
use crate::chat;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::store::{NewChatMessage, SiteStore};
use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
pub struct ChatArgs {
    #[command(subcommand)]
    command: ChatCommand,
}

#[derive(Subcommand, Debug)]
enum ChatCommand {
    /// Show every message of a session with its reply.
    History {
        /// Session identifier.
        session_id: String,
    },
    /// Send a message as a visitor and print the reply.
    Send {
        /// Session identifier.
        session_id: String,
        /// Message text.
        message: String,
    },
}

pub async fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    let store = SiteStore::open(&config.storage)?;
    match args.command {
        ChatCommand::History { session_id } => {
            let messages = store.list_chat_messages(&session_id);
            if messages.is_empty() {
                println!("No messages in session '{}'.", session_id);
                return Ok(());
            }
            for message in &messages {
                println!(
                    "[{}] visitor: {}",
                    message.created_at.format("%Y-%m-%d %H:%M"),
                    message.message
                );
                if let Some(response) = &message.response {
                    println!("{:>18}  bot: {}", "", response);
                }
            }
        }
        ChatCommand::Send {
            session_id,
            message,
        } => {
            if session_id.trim().is_empty() || message.trim().is_empty() {
                bail!("Session id and message must not be empty");
            }
            let exchange = chat::converse(
                &store,
                NewChatMessage {
                    session_id,
                    message,
                },
                &mut rand::rng(),
            )?;
            info!("Stored chat message #{}", exchange.id);
            println!("{}", exchange.response);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_args_parse() {
        let args = ChatArgs::parse_from(["chat", "send", "abc", "Hello there"]);
        match args.command {
            ChatCommand::Send {
                session_id,
                message,
            } => {
                assert_eq!(session_id, "abc");
                assert_eq!(message, "Hello there");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_history_requires_session() {
        assert!(ChatArgs::try_parse_from(["chat", "history"]).is_err());
    }
}
