//! # Leadbox Record Store
//!
//! File: cli/src/store/mod.rs
//!
//! ## Overview
//!
//! Durable storage for contacts, newsletter subscriptions, chat messages and
//! users. Each type lives in its own CSV table inside the configured data
//! directory:
//!
//! | Table               | Columns                                                        |
//! |---------------------|----------------------------------------------------------------|
//! | `contacts.csv`      | id, firstName, lastName, email, company, service, message, createdAt |
//! | `newsletters.csv`   | id, email, subscribed, createdAt                               |
//! | `chat-messages.csv` | id, sessionId, message, response, createdAt                    |
//! | `users.csv`         | id, username, password                                         |
//!
//! `SiteStore` is the facade the HTTP handlers and CLI commands use. It
//! wraps one `RecordStore` per type.
//!
//! ## Usage
//!
//! ```rust
//! let store = SiteStore::open(&config.storage)?;
//! let contact = store.create_contact(new_contact)?;
//! let everyone = store.list_contacts();
//! ```
//!
pub mod records;
pub mod repository;

pub use records::{
    ChatMessage, Contact, NewChatMessage, NewContact, NewSubscription, NewUser,
    NewsletterSubscription, User,
};
use repository::RecordStore;

use crate::common::fs::io;
use crate::core::config::StorageConfig;
use crate::core::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// The record tables of one data directory.
#[derive(Debug)]
pub struct SiteStore {
    data_dir: PathBuf,
    contacts: RecordStore<Contact>,
    newsletters: RecordStore<NewsletterSubscription>,
    chat_messages: RecordStore<ChatMessage>,
    users: RecordStore<User>,
}

impl SiteStore {
    /// Opens the data directory named by `config`, creating it if absent.
    pub fn open(config: &StorageConfig) -> Result<Self> {
        Self::open_dir(&config.data_dir())
    }

    pub fn open_dir(data_dir: &Path) -> Result<Self> {
        io::ensure_dir_exists(data_dir)?;
        info!("Using data directory {}", data_dir.display());
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            contacts: RecordStore::new(data_dir),
            newsletters: RecordStore::new(data_dir),
            chat_messages: RecordStore::new(data_dir),
            users: RecordStore::new(data_dir),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    // --- Contacts ---

    pub fn create_contact(&self, input: NewContact) -> Result<Contact> {
        self.contacts.create(input)
    }

    pub fn list_contacts(&self) -> Vec<Contact> {
        self.contacts.list()
    }

    // --- Newsletter ---

    pub fn subscribe_newsletter(&self, input: NewSubscription) -> Result<NewsletterSubscription> {
        self.newsletters.create(input)
    }

    pub fn list_subscribers(&self) -> Vec<NewsletterSubscription> {
        self.newsletters.list()
    }

    // --- Chat ---

    pub fn create_chat_message(&self, input: NewChatMessage) -> Result<ChatMessage> {
        self.chat_messages.create(input)
    }

    /// Messages of one session, oldest first.
    pub fn list_chat_messages(&self, session_id: &str) -> Vec<ChatMessage> {
        self.chat_messages
            .filter(|message| message.session_id == session_id)
    }

    /// Fills in the generated reply. `Ok(None)` when no message has `id`.
    pub fn update_chat_message_response(
        &self,
        id: u64,
        response: &str,
    ) -> Result<Option<ChatMessage>> {
        self.chat_messages
            .update(id, |message| message.response = Some(response.to_string()))
    }

    // --- Users ---

    #[allow(dead_code)] // No route serves users yet.
    pub fn get_user(&self, id: u64) -> Option<User> {
        self.users.find_by_id(id)
    }

    #[allow(dead_code)] // No route serves users yet.
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.find_first(|user| user.username == username)
    }

    #[allow(dead_code)] // No route serves users yet.
    pub fn create_user(&self, input: NewUser) -> Result<User> {
        self.users.create(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn open_temp_store() -> (TempDir, SiteStore) {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = SiteStore::open_dir(dir.path()).expect("Failed to open store");
        (dir, store)
    }

    fn new_contact(first: &str) -> NewContact {
        NewContact {
            first_name: first.into(),
            last_name: "Tester".into(),
            email: format!("{}@example.com", first.to_lowercase()),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_creates_data_dir() -> Result<()> {
        let base = tempdir()?;
        let data_dir = base.path().join("excel-data");
        let store = SiteStore::open_dir(&data_dir)?;
        assert!(data_dir.is_dir());
        assert_eq!(store.data_dir(), data_dir);
        Ok(())
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let (_dir, store) = open_temp_store();
        assert!(store.list_contacts().is_empty());
        assert!(store.list_subscribers().is_empty());
        assert!(store.list_chat_messages("any").is_empty());
        assert!(store.get_user(1).is_none());
    }

    #[test]
    fn test_create_contact_adds_exactly_one_record() -> Result<()> {
        let (dir, store) = open_temp_store();
        store.create_contact(new_contact("Ada"))?;
        let before = store.list_contacts().len();

        let contact = store.create_contact(NewContact {
            company: Some(String::new()),
            service: Some("Chatbots".into()),
            ..new_contact("Grace")
        })?;

        let contacts = store.list_contacts();
        assert_eq!(contacts.len(), before + 1);
        assert_eq!(contact.id, 2);
        assert_eq!(contacts.last(), Some(&contact));
        assert_eq!(contact.company, None);
        assert_eq!(contact.message, None);
        assert_eq!(contact.service.as_deref(), Some("Chatbots"));

        let raw = fs::read_to_string(dir.path().join("contacts.csv"))?;
        assert!(raw.starts_with(
            "id,firstName,lastName,email,company,service,message,createdAt\n"
        ));
        Ok(())
    }

    #[test]
    fn test_each_table_has_its_own_ids() -> Result<()> {
        let (_dir, store) = open_temp_store();
        store.create_contact(new_contact("Ada"))?;
        store.create_contact(new_contact("Bob"))?;

        let sub = store.subscribe_newsletter(NewSubscription {
            email: "news@example.com".into(),
        })?;
        let chat = store.create_chat_message(NewChatMessage {
            session_id: "s".into(),
            message: "hello".into(),
        })?;

        assert_eq!(sub.id, 1);
        assert!(sub.subscribed);
        assert_eq!(chat.id, 1);
        Ok(())
    }

    #[test]
    fn test_chat_messages_filtered_by_session() -> Result<()> {
        let (_dir, store) = open_temp_store();
        for (session, text) in [("a", "one"), ("b", "two"), ("a", "three")] {
            store.create_chat_message(NewChatMessage {
                session_id: session.into(),
                message: text.into(),
            })?;
        }

        let session_a: Vec<String> = store
            .list_chat_messages("a")
            .into_iter()
            .map(|m| m.message)
            .collect();
        assert_eq!(session_a, vec!["one", "three"]);
        Ok(())
    }

    #[test]
    fn test_update_response_only_touches_response() -> Result<()> {
        let (_dir, store) = open_temp_store();
        let created = store.create_chat_message(NewChatMessage {
            session_id: "s1".into(),
            message: "How much?".into(),
        })?;

        let updated = store
            .update_chat_message_response(created.id, "It depends.")?
            .expect("message should exist");

        assert_eq!(updated.response.as_deref(), Some("It depends."));
        assert_eq!(updated.session_id, created.session_id);
        assert_eq!(updated.message, created.message);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(store.list_chat_messages("s1"), vec![updated]);
        Ok(())
    }

    #[test]
    fn test_update_response_for_unknown_id() -> Result<()> {
        let (dir, store) = open_temp_store();
        store.create_chat_message(NewChatMessage {
            session_id: "s1".into(),
            message: "hi".into(),
        })?;
        let path = dir.path().join("chat-messages.csv");
        let before = fs::read(&path)?;

        assert!(store.update_chat_message_response(99, "nope")?.is_none());
        assert_eq!(fs::read(&path)?, before);
        Ok(())
    }

    #[test]
    fn test_users_by_id_and_username() -> Result<()> {
        let (_dir, store) = open_temp_store();
        store.create_user(NewUser {
            username: "admin".into(),
            password: "secret".into(),
        })?;
        let second = store.create_user(NewUser {
            username: "editor".into(),
            password: "hunter2".into(),
        })?;

        assert_eq!(store.get_user(2), Some(second.clone()));
        assert_eq!(store.get_user_by_username("editor"), Some(second));
        assert!(store.get_user_by_username("nobody").is_none());
        Ok(())
    }

    #[test]
    fn test_corrupt_tables_read_as_empty() -> Result<()> {
        let (dir, store) = open_temp_store();
        for name in ["contacts.csv", "newsletters.csv", "chat-messages.csv", "users.csv"] {
            fs::write(dir.path().join(name), "id,garbage\n\"unterminated,1\n")?;
        }

        assert!(store.list_contacts().is_empty());
        assert!(store.list_subscribers().is_empty());
        assert!(store.list_chat_messages("s").is_empty());
        assert!(store.get_user_by_username("admin").is_none());
        Ok(())
    }
}
