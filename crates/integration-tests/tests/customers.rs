//! Live integration tests for the customer API.
//!
//! These tests require a running server (cargo run -p clientele-server).
//! They create, mutate, and delete their own records, so they are safe to
//! run repeatedly against the same instance.
//!
//! Run with: cargo test -p clientele-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use chrono::{Months, NaiveDate, Utc};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the customer API (configurable via environment).
fn base_url() -> String {
    std::env::var("CLIENTELE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

fn months_ago(months: u32) -> NaiveDate {
    Utc::now()
        .date_naive()
        .checked_sub_months(Months::new(months))
        .unwrap()
}

/// Test helper: create a customer and return the response body.
async fn create_customer(client: &Client, body: &Value) -> Value {
    let resp = client
        .post(format!("{}/customers", base_url()))
        .json(body)
        .send()
        .await
        .expect("Failed to create customer");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to read response")
}

#[tokio::test]
#[ignore = "Requires a running clientele server"]
async fn test_create_and_retrieve_customer() {
    let client = Client::new();
    let created = create_customer(
        &client,
        &json!({
            "name": "Alice White",
            "email": "alice@example.com",
            "annualSpend": 1555,
            "lastPurchaseDate": months_ago(3).to_string(),
        }),
    )
    .await;

    assert_eq!(created["name"], "Alice White");
    assert_eq!(created["tier"], "Gold");

    let id = created["id"].as_str().unwrap();
    assert!(Uuid::parse_str(id).is_ok());

    let resp = client
        .get(format!("{}/customers/{id}", base_url()))
        .send()
        .await
        .expect("Failed to get customer");
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched["name"], "Alice White");
    assert_eq!(fetched["email"], "alice@example.com");
}

#[tokio::test]
#[ignore = "Requires a running clientele server"]
async fn test_update_drops_tier() {
    let client = Client::new();
    let created = create_customer(
        &client,
        &json!({
            "name": "Bob Blue",
            "email": "bob@companyone.com",
            "annualSpend": 12111,
            "lastPurchaseDate": months_ago(2).to_string(),
        }),
    )
    .await;
    assert_eq!(created["tier"], "Platinum");

    let id = created["id"].as_str().unwrap();
    let resp = client
        .put(format!("{}/customers/{id}", base_url()))
        .json(&json!({
            "annualSpend": 599,
            "lastPurchaseDate": months_ago(24).to_string(),
        }))
        .send()
        .await
        .expect("Failed to update customer");
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["tier"], "Silver");
    // Untouched fields survive the partial update
    assert_eq!(updated["name"], "Bob Blue");
    assert_eq!(updated["email"], "bob@companyone.com");
}

#[tokio::test]
#[ignore = "Requires a running clientele server"]
async fn test_delete_customer() {
    let client = Client::new();
    let created = create_customer(
        &client,
        &json!({
            "name": "Charlie Hawk",
            "email": "charlie@example.com",
            "annualSpend": 7777,
            "lastPurchaseDate": months_ago(10).to_string(),
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .delete(format!("{}/customers/{id}", base_url()))
        .send()
        .await
        .expect("Failed to delete customer");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/customers/{id}", base_url()))
        .send()
        .await
        .expect("Failed to get customer");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires a running clientele server"]
async fn test_create_rejects_client_supplied_id() {
    let client = Client::new();
    let resp = client
        .post(format!("{}/customers", base_url()))
        .json(&json!({
            "id": Uuid::new_v4().to_string(),
            "name": "Dana Reed",
            "email": "dana@example.com",
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires a running clientele server"]
async fn test_list_by_unknown_email_is_empty() {
    let client = Client::new();
    let resp = client
        .get(format!(
            "{}/customers?email=nonexistent@company.com",
            base_url()
        ))
        .send()
        .await
        .expect("Failed to list customers");
    assert_eq!(resp.status(), StatusCode::OK);

    let matches: Value = resp.json().await.unwrap();
    assert_eq!(matches.as_array().unwrap().len(), 0);
}
