//! # Leadbox Admin Command Integration Tests
//!
//! File: cli/tests/admin.rs
//!
//! Runs the `contacts`, `newsletter` and `chat` command groups against a
//! temporary data directory.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_contacts_list_on_empty_store() {
    let sandbox = tempdir().expect("Failed to create temp dir");

    sandboxed_cmd(sandbox.path())
        .args(["contacts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet."));

    assert!(sandbox.path().join("data").is_dir());
}

#[test]
fn test_contacts_list_json_reads_existing_table() {
    let sandbox = tempdir().expect("Failed to create temp dir");
    let data = sandbox.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("contacts.csv"),
        "id,firstName,lastName,email,company,service,message,createdAt\n\
         1,Grace,Hopper,grace@example.com,,Automation,,2026-10-01T09:00:00Z\n",
    )
    .unwrap();

    sandboxed_cmd(sandbox.path())
        .args(["contacts", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"firstName\": \"Grace\""))
        .stdout(predicate::str::contains("\"company\": null"));
}

#[test]
fn test_newsletter_list_json() {
    let sandbox = tempdir().expect("Failed to create temp dir");
    let data = sandbox.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("newsletters.csv"),
        "id,email,subscribed,createdAt\n1,reader@example.com,true,2026-10-02T10:00:00Z\n",
    )
    .unwrap();

    sandboxed_cmd(sandbox.path())
        .args(["newsletter", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reader@example.com"))
        .stdout(predicate::str::contains("\"subscribed\": true"));
}

#[test]
fn test_chat_send_then_history() {
    let sandbox = tempdir().expect("Failed to create temp dir");

    sandboxed_cmd(sandbox.path())
        .args(["chat", "send", "visitor-1", "Hello"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());

    sandboxed_cmd(sandbox.path())
        .args(["chat", "history", "visitor-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visitor: Hello"))
        .stdout(predicate::str::contains("bot: "));

    let table = fs::read_to_string(sandbox.path().join("data").join("chat-messages.csv")).unwrap();
    assert!(table.starts_with("id,sessionId,message,response,createdAt"));
    assert!(table.contains("visitor-1"));
}

#[test]
fn test_chat_history_of_unknown_session() {
    let sandbox = tempdir().expect("Failed to create temp dir");

    sandboxed_cmd(sandbox.path())
        .args(["chat", "history", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No messages in session 'nobody'."));
}

#[test]
fn test_data_dir_that_is_a_file_fails() {
    let sandbox = tempdir().expect("Failed to create temp dir");
    fs::write(sandbox.path().join("data"), "not a directory").unwrap();

    sandboxed_cmd(sandbox.path())
        .args(["contacts", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}
