//! # Admin Dashboard
//!
//! File: cli/src/commands/serve/dashboard.rs
//!
//! Serves `GET /admin`: an HTML overview of contacts and newsletter
//! subscribers. `summarize` builds the template context from the stored
//! records and is kept free of I/O so it can be tested directly.
//!
use super::handlers::{error_response, run_blocking, AppState};
use crate::core::templating;
use crate::store::{Contact, NewsletterSubscription};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use tracing::error;

const DASHBOARD_TEMPLATE: &str = include_str!("../../../templates/dashboard.html.tera");

/// Number of contacts in the "recent" panel.
const RECENT_CONTACTS: usize = 5;
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";
const MISSING: &str = "-";

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_contacts: usize,
    pub total_subscribers: usize,
    pub contacts_this_month: usize,
    pub recent_contacts: Vec<ContactRow>,
    pub contacts: Vec<ContactRow>,
    pub subscribers: Vec<SubscriberRow>,
    pub generated_at: String,
}

#[derive(Debug, Serialize)]
pub struct ContactRow {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
    pub submitted: String,
}

#[derive(Debug, Serialize)]
pub struct SubscriberRow {
    pub id: u64,
    pub email: String,
    pub status: &'static str,
    pub subscribed_on: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        let or_missing = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING.to_string());
        Self {
            id: contact.id,
            name: format!("{} {}", contact.first_name, contact.last_name),
            email: contact.email.clone(),
            company: or_missing(&contact.company),
            service: or_missing(&contact.service),
            message: or_missing(&contact.message),
            submitted: contact.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

impl From<&NewsletterSubscription> for SubscriberRow {
    fn from(subscription: &NewsletterSubscription) -> Self {
        Self {
            id: subscription.id,
            email: subscription.email.clone(),
            status: if subscription.subscribed {
                "Subscribed"
            } else {
                "Unsubscribed"
            },
            subscribed_on: subscription.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Builds the dashboard context. "This month" is the calendar month of `now` in UTC.
pub fn summarize(
    contacts: &[Contact],
    subscribers: &[NewsletterSubscription],
    now: DateTime<Utc>,
) -> DashboardSummary {
    let contacts_this_month = contacts
        .iter()
        .filter(|c| c.created_at.year() == now.year() && c.created_at.month() == now.month())
        .count();

    let mut newest_first: Vec<&Contact> = contacts.iter().collect();
    newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

    DashboardSummary {
        total_contacts: contacts.len(),
        total_subscribers: subscribers.len(),
        contacts_this_month,
        recent_contacts: newest_first
            .iter()
            .take(RECENT_CONTACTS)
            .map(|c| ContactRow::from(*c))
            .collect(),
        contacts: contacts.iter().map(ContactRow::from).collect(),
        subscribers: subscribers.iter().map(SubscriberRow::from).collect(),
        generated_at: now.format(DATE_FORMAT).to_string(),
    }
}

/// `GET /admin`
pub async fn admin_dashboard(State(state): State<AppState>) -> Response {
    let store = state.store.clone();
    let rendered = run_blocking(move || {
        let summary = summarize(&store.list_contacts(), &store.list_subscribers(), Utc::now());
        templating::render_page(DASHBOARD_TEMPLATE, &summary)
    })
    .await;

    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render admin dashboard: {:#}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to render dashboard")
        }
    }
}
