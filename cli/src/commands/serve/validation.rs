//! # Request Validation
//!
//! File: cli/src/commands/serve/validation.rs
//!
//! Request bodies deserialize into lenient form structs (missing fields become
//! empty strings) and are then checked here, so a missing or blank field is
//! reported field by field. A body the JSON extractor cannot decode at all
//! (malformed, or a field of the wrong type) is reported as one `body` error.
//!
use crate::store::{NewChatMessage, NewContact, NewSubscription};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// One rejected field, reported in the `details` array of a 400 response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }

    /// The request body as a whole could not be read as the expected JSON.
    pub fn body(message: String) -> Self {
        Self {
            field: "body",
            message,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewsletterForm {
    pub email: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatForm {
    pub session_id: String,
    pub message: String,
}

pub fn validate_contact(form: ContactForm) -> Result<NewContact, Vec<FieldError>> {
    let mut errors = Vec::new();
    require(&mut errors, "firstName", &form.first_name);
    require(&mut errors, "lastName", &form.last_name);
    check_email(&mut errors, &form.email);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewContact {
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email.trim().to_string(),
        company: form.company,
        service: form.service,
        message: form.message,
    })
}

pub fn validate_newsletter(form: NewsletterForm) -> Result<NewSubscription, Vec<FieldError>> {
    let mut errors = Vec::new();
    check_email(&mut errors, &form.email);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewSubscription {
        email: form.email.trim().to_string(),
    })
}

pub fn validate_chat(form: ChatForm) -> Result<NewChatMessage, Vec<FieldError>> {
    let mut errors = Vec::new();
    require(&mut errors, "sessionId", &form.session_id);
    require(&mut errors, "message", &form.message);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewChatMessage {
        session_id: form.session_id,
        message: form.message,
    })
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "Required"));
    }
}

fn check_email(errors: &mut Vec<FieldError>, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError::new("email", "Required"));
    } else if !EMAIL_PATTERN.is_match(value) {
        errors.push(FieldError::new("email", "Invalid email"));
    }
}
