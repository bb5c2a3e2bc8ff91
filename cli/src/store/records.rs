//! # Record Types
//!
//! File: cli/src/store/records.rs
//!
//! The four record types Leadbox stores, their creation inputs, and their
//! `Record` implementations. Field names serialize as camelCase, which makes
//! them both the CSV column names and the JSON keys of the HTTP API.
//!
//! Optional text fields are `Option<String>`. An absent value is `null` in
//! JSON and an empty cell on disk; a supplied empty string is stored as absent.
//!
use super::repository::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated contact-form fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Record for Contact {
    type Input = NewContact;
    const FILE_NAME: &'static str = "contacts.csv";
    const HEADERS: &'static [&'static str] = &[
        "id",
        "firstName",
        "lastName",
        "email",
        "company",
        "service",
        "message",
        "createdAt",
    ];

    fn id(&self) -> u64 {
        self.id
    }

    fn build(id: u64, created_at: DateTime<Utc>, input: NewContact) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            company: absent_if_empty(input.company),
            service: absent_if_empty(input.service),
            message: absent_if_empty(input.message),
            created_at,
        }
    }
}

/// A newsletter sign-up. `subscribed` is always true when created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub id: u64,
    pub email: String,
    pub subscribed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewSubscription {
    pub email: String,
}

impl Record for NewsletterSubscription {
    type Input = NewSubscription;
    const FILE_NAME: &'static str = "newsletters.csv";
    const HEADERS: &'static [&'static str] = &["id", "email", "subscribed", "createdAt"];

    fn id(&self) -> u64 {
        self.id
    }

    fn build(id: u64, created_at: DateTime<Utc>, input: NewSubscription) -> Self {
        Self {
            id,
            email: input.email,
            subscribed: true,
            created_at,
        }
    }
}

/// One visitor message in a chat session, plus the reply once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub session_id: String,
    pub message: String,
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChatMessage {
    pub session_id: String,
    pub message: String,
}

impl Record for ChatMessage {
    type Input = NewChatMessage;
    const FILE_NAME: &'static str = "chat-messages.csv";
    const HEADERS: &'static [&'static str] =
        &["id", "sessionId", "message", "response", "createdAt"];

    fn id(&self) -> u64 {
        self.id
    }

    fn build(id: u64, created_at: DateTime<Utc>, input: NewChatMessage) -> Self {
        Self {
            id,
            session_id: input.session_id,
            message: input.message,
            response: None,
            created_at,
        }
    }
}

/// Dashboard user. Stored for interface symmetry; no route reads or writes users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl Record for User {
    type Input = NewUser;
    const FILE_NAME: &'static str = "users.csv";
    const HEADERS: &'static [&'static str] = &["id", "username", "password"];

    fn id(&self) -> u64 {
        self.id
    }

    // Users carry no timestamp.
    fn build(id: u64, _created_at: DateTime<Utc>, input: NewUser) -> Self {
        Self {
            id,
            username: input.username,
            password: input.password,
        }
    }
}

fn absent_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> DateTime<Utc> {
        text.parse().unwrap()
    }

    #[test]
    fn test_contact_normalizes_empty_optionals() {
        let contact = Contact::build(
            3,
            at("2025-05-05T12:00:00Z"),
            NewContact {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@example.com".into(),
                company: Some(String::new()),
                service: None,
                message: Some("Need a chatbot".into()),
            },
        );
        assert_eq!(contact.id, 3);
        assert_eq!(contact.company, None);
        assert_eq!(contact.service, None);
        assert_eq!(contact.message.as_deref(), Some("Need a chatbot"));
    }

    #[test]
    fn test_contact_json_uses_camel_case_and_null() {
        let contact = Contact::build(
            1,
            at("2025-05-05T12:00:00Z"),
            NewContact {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@example.com".into(),
                ..Default::default()
            },
        );
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert!(json["company"].is_null());
        assert_eq!(json["createdAt"], "2025-05-05T12:00:00Z");
    }

    #[test]
    fn test_subscription_and_chat_defaults() {
        let sub = NewsletterSubscription::build(
            1,
            at("2025-01-01T00:00:00Z"),
            NewSubscription {
                email: "a@b.co".into(),
            },
        );
        assert!(sub.subscribed);

        let chat = ChatMessage::build(
            1,
            at("2025-01-01T00:00:00Z"),
            NewChatMessage {
                session_id: "s1".into(),
                message: "hi".into(),
            },
        );
        assert!(chat.response.is_none());
    }
}
