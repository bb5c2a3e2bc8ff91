//! # API Route Handlers
//!
//! File: cli/src/commands/serve/handlers.rs
//!
//! ## Overview
//!
//! Handlers for the JSON API under `/api`. Store access is blocking file I/O,
//! so every store call runs on tokio's blocking pool via `run_blocking`.
//!
//! Failures are answered with a JSON body of the form `{"error": "..."}`.
//! A body that is not valid JSON for the route, or that fails validation, is a
//! 400 whose `details` array lists one `FieldError` per problem. Storage
//! failures are logged with their full cause chain and answered with a
//! generic 500.
//!
use super::validation::{self, ChatForm, ContactForm, FieldError, NewsletterForm};
use crate::chat;
use crate::core::error::Result;
use crate::store::SiteStore;
use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<SiteStore>,
}

impl AppState {
    pub fn new(store: SiteStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Runs a store operation on the blocking thread pool.
pub(super) async fn run_blocking<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .context("Store task did not run to completion")?
}

pub(super) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn server_error(message: &str, err: anyhow::Error) -> Response {
    error!("{}: {:#}", message, err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

fn invalid(message: &str, details: Vec<FieldError>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message, "details": details })),
    )
        .into_response()
}

/// A JSON body, or why axum could not extract it.
type JsonBody<T> = std::result::Result<Json<T>, JsonRejection>;

/// Unwraps a JSON body, answering a rejected one with the route's 400.
fn parse_body<T>(body: JsonBody<T>, message: &str) -> std::result::Result<T, Response> {
    match body {
        Ok(Json(form)) => Ok(form),
        Err(rejection) => {
            debug!("Rejected request body: {}", rejection.body_text());
            Err(invalid(message, vec![FieldError::body(rejection.body_text())]))
        }
    }
}

pub async fn health() -> Response {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") })).into_response()
}

/// `POST /api/contacts`
pub async fn create_contact(
    State(state): State<AppState>,
    body: JsonBody<ContactForm>,
) -> Response {
    const INVALID: &str = "Invalid contact data";
    let input = match parse_body(body, INVALID).map(validation::validate_contact) {
        Ok(Ok(input)) => input,
        Ok(Err(details)) => return invalid(INVALID, details),
        Err(response) => return response,
    };
    let store = state.store.clone();
    match run_blocking(move || store.create_contact(input)).await {
        Ok(contact) => {
            info!("New contact #{} from {}", contact.id, contact.email);
            Json(json!({ "success": true, "contact": contact })).into_response()
        }
        Err(e) => server_error("Failed to create contact", e),
    }
}

/// `GET /api/contacts`
pub async fn list_contacts(State(state): State<AppState>) -> Response {
    let store = state.store.clone();
    match run_blocking(move || Ok(store.list_contacts())).await {
        Ok(contacts) => Json(contacts).into_response(),
        Err(e) => server_error("Failed to fetch contacts", e),
    }
}

/// `POST /api/newsletter`
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    body: JsonBody<NewsletterForm>,
) -> Response {
    const INVALID: &str = "Invalid email address";
    let input = match parse_body(body, INVALID).map(validation::validate_newsletter) {
        Ok(Ok(input)) => input,
        Ok(Err(details)) => return invalid(INVALID, details),
        Err(response) => return response,
    };
    let store = state.store.clone();
    match run_blocking(move || store.subscribe_newsletter(input)).await {
        Ok(subscription) => {
            info!("Newsletter subscription #{}", subscription.id);
            Json(json!({ "success": true, "subscription": subscription })).into_response()
        }
        Err(e) => server_error("Failed to subscribe to newsletter", e),
    }
}

/// `GET /api/newsletters`
pub async fn list_subscribers(State(state): State<AppState>) -> Response {
    let store = state.store.clone();
    match run_blocking(move || Ok(store.list_subscribers())).await {
        Ok(subscribers) => Json(subscribers).into_response(),
        Err(e) => server_error("Failed to fetch newsletter subscribers", e),
    }
}

/// `POST /api/chat`
pub async fn send_chat_message(
    State(state): State<AppState>,
    body: JsonBody<ChatForm>,
) -> Response {
    const INVALID: &str = "Invalid message data";
    let input = match parse_body(body, INVALID).map(validation::validate_chat) {
        Ok(Ok(input)) => input,
        Ok(Err(details)) => return invalid(INVALID, details),
        Err(response) => return response,
    };
    let store = state.store.clone();
    // ThreadRng is not Send, so it is created on the blocking thread.
    let result = run_blocking(move || chat::converse(&store, input, &mut rand::rng())).await;
    match result {
        Ok(exchange) => Json(json!({
            "success": true,
            "message": exchange.message,
            "response": exchange.response,
        }))
        .into_response(),
        Err(e) => server_error("Failed to process chat message", e),
    }
}

/// `GET /api/chat/{session_id}`
pub async fn chat_history(State(state): State<AppState>, Path(session_id): Path<String>) -> Response {
    let store = state.store.clone();
    match run_blocking(move || Ok(store.list_chat_messages(&session_id))).await {
        Ok(messages) => Json(messages).into_response(),
        Err(e) => server_error("Failed to fetch chat history", e),
    }
}
