mod common;

use axum::http::StatusCode;
use chrono::DateTime;
use serde_json::json;

#[tokio::test]
async fn test_create_contact_success() {
    let (state, repos) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Hi",
            "message": "Help"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();

    // Server-assigned fields are present in the returned record.
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["status"], "new");
    let created_at = body["createdAt"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(created_at).is_ok());

    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["email"], "jane@example.com");
    assert_eq!(body["subject"], "Hi");
    assert_eq!(body["message"], "Help");

    // Exactly one document was written and it matches the response.
    let stored = repos.contacts.snapshot();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, body["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_create_contact_with_phone() {
    let (state, repos) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "+91 98765 43210",
            "subject": "Hi",
            "message": "Help"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["phone"], "+91 98765 43210");

    let stored = repos.contacts.snapshot();
    assert_eq!(stored[0].phone.as_deref(), Some("+91 98765 43210"));
}

#[tokio::test]
async fn test_create_contact_malformed_email_writes_nothing() {
    let (state, repos) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Jane Doe",
            "email": "not-an-email",
            "subject": "Hi",
            "message": "Help"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["details"].get("email").is_some());

    // Validation failed before any store access.
    assert!(repos.contacts.snapshot().is_empty());
}

#[tokio::test]
async fn test_create_contact_empty_required_field_rejected() {
    let (state, repos) = common::create_test_state();
    let server = common::make_server(state);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "",
            "email": "jane@example.com",
            "subject": "Hi",
            "message": "Help"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(repos.contacts.snapshot().is_empty());
}

#[tokio::test]
async fn test_create_contact_ids_are_unique() {
    let (state, repos) = common::create_test_state();
    let server = common::make_server(state);

    for _ in 0..2 {
        server
            .post("/api/contact")
            .json(&json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "subject": "Hi",
                "message": "Help"
            }))
            .await
            .assert_status_ok();
    }

    let stored = repos.contacts.snapshot();
    assert_eq!(stored.len(), 2);
    assert_ne!(stored[0].id, stored[1].id);
}
