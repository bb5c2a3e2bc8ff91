//! # Leadbox Chat Widget
//!
//! File: cli/src/chat/mod.rs
//!
//! ## Overview
//!
//! Runs one exchange of the site's chat widget:
//! 1. Store the visitor's message with no response.
//! 2. Load the session's messages, the new one included.
//! 3. Pick a canned reply with `responder::generate_response`, using the
//!    message count as the turn count.
//! 4. Store the reply on the message.
//!
//! The HTTP `POST /api/chat` handler and `leadbox chat send` share this flow.
//!
pub mod responder;

use crate::core::error::Result;
use crate::store::{ChatMessage, NewChatMessage, SiteStore};
use rand::Rng;
use responder::PriorTurn;
use tracing::{debug, warn};

/// Result of one exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatExchange {
    /// Stored message id.
    pub id: u64,
    pub message: String,
    pub response: String,
}

/// Stores `input`, generates a reply from the session history and stores the reply.
pub fn converse<R: Rng>(store: &SiteStore, input: NewChatMessage, rng: &mut R) -> Result<ChatExchange> {
    let created = store.create_chat_message(input)?;
    let session = store.list_chat_messages(&created.session_id);
    let history: Vec<PriorTurn<'_>> = session.iter().map(prior_turn).collect();

    let response = responder::generate_response(&created.message, session.len(), &history, rng);
    debug!(
        "Session {} turn {}: replying to message #{}",
        created.session_id,
        session.len(),
        created.id
    );

    if store
        .update_chat_message_response(created.id, &response)?
        .is_none()
    {
        // Only possible if the table was replaced between the two writes.
        warn!(
            "Chat message #{} vanished before its response was stored.",
            created.id
        );
    }

    Ok(ChatExchange {
        id: created.id,
        message: created.message,
        response,
    })
}

fn prior_turn(message: &ChatMessage) -> PriorTurn<'_> {
    PriorTurn {
        message: &message.message,
        response: message.response.as_deref(),
    }
}
