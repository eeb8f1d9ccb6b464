//! Router-level tests for the customer API.
//!
//! Each test drives the real router (state, validation, service, in-memory
//! store) through `tower::ServiceExt::oneshot`, with no listening socket.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use chrono::{Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use clientele_server::config::ServerConfig;
use clientele_server::routes;
use clientele_server::routes::customers::{CustomerResponse, DeleteResponse};
use clientele_server::state::AppState;

fn app() -> Router {
    routes::routes().with_state(AppState::new(ServerConfig::default()))
}

fn months_ago(months: u32) -> NaiveDate {
    Utc::now()
        .date_naive()
        .checked_sub_months(Months::new(months))
        .unwrap()
}

fn request(method: &str, uri: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_customer(app: &Router, body: &Value) -> CustomerResponse {
    let response = app
        .clone()
        .oneshot(request("POST", "/customers", Some(body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn alice() -> Value {
    json!({
        "name": "Alice White",
        "email": "alice@example.com",
        "annualSpend": 1555,
        "lastPurchaseDate": months_ago(3).to_string(),
    })
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(request("GET", "/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_assigns_id_and_reports_tier() {
    let app = app();
    let created = create_customer(&app, &alice()).await;

    assert_eq!(created.name.as_str(), "Alice White");
    assert_eq!(created.email.as_str(), "alice@example.com");
    assert_eq!(created.annual_spend, Some(Decimal::from(1555)));
    assert_eq!(created.tier.as_str(), "Gold");
    // The id is a store-assigned uuid
    assert!(Uuid::parse_str(&created.id.to_string()).is_ok());
}

#[tokio::test]
async fn test_create_rejects_client_supplied_id() {
    let mut body = alice();
    body["id"] = json!("1db64e9f-7f34-4bc5-b6b0-3bb86e0c8c9f");

    let response = app()
        .oneshot(request("POST", "/customers", Some(&body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_blank_or_missing_fields() {
    let app = app();

    let mut blank_name = alice();
    blank_name["name"] = json!("   ");
    let response = app
        .clone()
        .oneshot(request("POST", "/customers", Some(&blank_name)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let missing_email = json!({"name": "Alice White"});
    let response = app
        .clone()
        .oneshot(request("POST", "/customers", Some(&missing_email)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bad_email = json!({"name": "Alice White", "email": "not-an-email"});
    let response = app
        .oneshot(request("POST", "/customers", Some(&bad_email)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_negative_spend() {
    let mut body = alice();
    body["annualSpend"] = json!(-5);

    let response = app()
        .oneshot(request("POST", "/customers", Some(&body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_unknown_fields() {
    let mut body = alice();
    body["nickname"] = json!("Al");

    let response = app()
        .oneshot(request("POST", "/customers", Some(&body)))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let response = app()
        .oneshot(request("GET", &format!("/customers/{}", Uuid::new_v4()), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_malformed_id_is_client_error() {
    let response = app()
        .oneshot(request("GET", "/customers/not-a-uuid", None))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let app = app();
    let created = create_customer(&app, &alice()).await;

    let response = app
        .oneshot(request("GET", &format!("/customers/{}", created.id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: CustomerResponse = body_json(response).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name.as_str(), "Alice White");
    assert_eq!(fetched.email.as_str(), "alice@example.com");
    assert_eq!(fetched.annual_spend, created.annual_spend);
    assert_eq!(fetched.last_purchase_date, created.last_purchase_date);
}

#[tokio::test]
async fn test_list_on_empty_store_is_empty_array() {
    let response = app()
        .oneshot(request("GET", "/customers", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let all: Vec<CustomerResponse> = body_json(response).await;
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_list_filters_by_exact_name_and_email() {
    let app = app();
    create_customer(&app, &alice()).await;
    create_customer(
        &app,
        &json!({
            "name": "Bob Blue",
            "email": "bob@companyone.com",
            "annualSpend": 12111,
            "lastPurchaseDate": months_ago(2).to_string(),
        }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(request("GET", "/customers?name=Alice%20White", None))
        .await
        .unwrap();
    let matches: Vec<CustomerResponse> = body_json(response).await;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches.first().unwrap().name.as_str(), "Alice White");

    let response = app
        .clone()
        .oneshot(request("GET", "/customers?email=bob@companyone.com", None))
        .await
        .unwrap();
    let matches: Vec<CustomerResponse> = body_json(response).await;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches.first().unwrap().email.as_str(), "bob@companyone.com");

    // No match is success with an empty array, not an error
    let response = app
        .clone()
        .oneshot(request("GET", "/customers?name=Nobody%20Here", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let matches: Vec<CustomerResponse> = body_json(response).await;
    assert!(matches.is_empty());

    let response = app
        .oneshot(request("GET", "/customers", None))
        .await
        .unwrap();
    let all: Vec<CustomerResponse> = body_json(response).await;
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_list_rejects_malformed_email_param() {
    let response = app()
        .oneshot(request("GET", "/customers?email=not-an-email", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let app = app();
    let created = create_customer(&app, &alice()).await;

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/customers/{}", created.id),
            Some(&json!({"annualSpend": 7600})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: CustomerResponse = body_json(response).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name.as_str(), "Alice White");
    assert_eq!(updated.email.as_str(), "alice@example.com");
    assert_eq!(updated.annual_spend, Some(Decimal::from(7600)));
    assert_eq!(updated.last_purchase_date, created.last_purchase_date);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let response = app()
        .oneshot(request(
            "PUT",
            &format!("/customers/{}", Uuid::new_v4()),
            Some(&json!({"annualSpend": 7600})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rejects_malformed_fields() {
    let app = app();
    let created = create_customer(&app, &alice()).await;

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/customers/{}", created.id),
            Some(&json!({"email": "broken"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_flow() {
    let app = app();
    let created = create_customer(&app, &alice()).await;
    let uri = format!("/customers/{}", created.id);

    let response = app
        .clone()
        .oneshot(request("DELETE", &uri, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ack: DeleteResponse = body_json(response).await;
    assert_eq!(ack.message, "Customer deleted successfully");

    let response = app.clone().oneshot(request("GET", &uri, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Delete is not idempotent: a second delete fails
    let response = app.oneshot(request("DELETE", &uri, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tier_drops_when_spend_and_recency_drop() {
    let app = app();
    let created = create_customer(&app, &alice()).await;
    assert_eq!(created.tier.as_str(), "Gold");

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/customers/{}", created.id),
            Some(&json!({
                "annualSpend": 599,
                "lastPurchaseDate": months_ago(24).to_string(),
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: CustomerResponse = body_json(response).await;
    assert_eq!(updated.tier.as_str(), "Silver");
}
