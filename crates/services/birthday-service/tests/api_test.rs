//! Integration tests for API endpoints.
//!
//! These tests drive the full router against the in-memory store and a fixed
//! clock, so no database is required.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use birthday_service_lib::api::{create_router, HealthCheck};
use birthday_service_lib::build_state;
use birthday_service_lib::clock::FixedClock;
use birthday_service_lib::repository::InMemoryBirthdayStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn app_on(today: NaiveDate) -> Router {
    let state = build_state(
        Arc::new(InMemoryBirthdayStore::new()),
        Arc::new(FixedClock::new(today)),
    );
    create_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn put_raw(app: &Router, username: &str, body: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(format!("/hello/{}", username))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn put_birthday(app: &Router, username: &str, date: &str) -> (StatusCode, Vec<u8>) {
    put_raw(app, username, &format!(r#"{{"dateOfBirth":"{}"}}"#, date)).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn error_code(body: &[u8]) -> String {
    let json: Value = serde_json::from_slice(body).unwrap();
    json["error"]["code"].as_str().unwrap().to_string()
}

// =============================================================================
// Write Path
// =============================================================================

#[tokio::test]
async fn test_put_valid_birthday_returns_no_content() {
    let app = app_on(ymd(2024, 3, 10));

    let (status, body) = put_birthday(&app, "bob", "1990-12-25").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_put_invalid_username() {
    let app = app_on(ymd(2024, 3, 10));

    for username in ["alice1", "jean-luc", "%C3%A9mile", "a_b"] {
        let (status, body) = put_birthday(&app, username, "1990-12-25").await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{username}");
        assert_eq!(error_code(&body), "INVALID_USERNAME", "{username}");
    }
}

#[tokio::test]
async fn test_put_invalid_username_reported_before_body_errors() {
    let app = app_on(ymd(2024, 3, 10));

    let (status, body) = put_raw(&app, "alice1", "not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "INVALID_USERNAME");
}

#[tokio::test]
async fn test_put_impossible_date() {
    let app = app_on(ymd(2024, 6, 1));

    let (status, body) = put_birthday(&app, "alice", "2024-02-30").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "INVALID_DATE_FORMAT");
}

#[tokio::test]
async fn test_put_malformed_date() {
    let app = app_on(ymd(2024, 6, 1));

    for date in ["1990-1-05", "05/01/1990", "yesterday", "1990-01-05T00:00:00"] {
        let (status, body) = put_birthday(&app, "alice", date).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{date}");
        assert_eq!(error_code(&body), "INVALID_DATE_FORMAT", "{date}");
    }
}

#[tokio::test]
async fn test_put_future_date() {
    let app = app_on(ymd(2024, 6, 1));

    let (status, body) = put_birthday(&app, "alice", "2025-01-01").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "DATE_NOT_IN_PAST");
    assert_eq!(json["error"]["message"], "Date must be before today");
}

#[tokio::test]
async fn test_put_today_rejected() {
    let app = app_on(ymd(2024, 6, 1));

    let (status, body) = put_birthday(&app, "alice", "2024-06-01").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "DATE_NOT_IN_PAST");
}

#[tokio::test]
async fn test_put_missing_field() {
    let app = app_on(ymd(2024, 6, 1));

    let (status, body) = put_raw(&app, "alice", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "Missing dateOfBirth");
}

#[tokio::test]
async fn test_put_null_field_is_missing() {
    let app = app_on(ymd(2024, 6, 1));

    let (status, body) = put_raw(&app, "alice", r#"{"dateOfBirth":null}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_put_empty_date_is_invalid_format() {
    let app = app_on(ymd(2024, 6, 1));

    let (status, body) = put_birthday(&app, "alice", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "INVALID_DATE_FORMAT");

    let (status, _) = get(&app, "/hello/alice").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_malformed_json() {
    let app = app_on(ymd(2024, 6, 1));

    let (status, body) = put_raw(&app, "alice", "{\"dateOfBirth\":").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_rejected_write_stores_nothing() {
    let app = app_on(ymd(2024, 6, 1));

    put_birthday(&app, "alice", "2025-01-01").await;
    let (status, _) = get(&app, "/hello/alice").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Read Path
// =============================================================================

#[tokio::test]
async fn test_get_days_until_birthday() {
    let app = app_on(ymd(2024, 3, 10));
    put_birthday(&app, "bob", "1990-12-25").await;

    let (status, json) = get_json(&app, "/hello/bob").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Hello, bob! Your birthday is in 290 day(s)");
}

#[tokio::test]
async fn test_get_happy_birthday() {
    let app = app_on(ymd(2024, 3, 10));
    put_birthday(&app, "alice", "2000-03-10").await;

    let (status, json) = get_json(&app, "/hello/alice").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Hello, alice! Happy birthday!");
}

#[tokio::test]
async fn test_get_leap_day_birthday_in_common_year() {
    let app = app_on(ymd(2023, 2, 28));
    put_birthday(&app, "leap", "2000-02-29").await;

    let (_, json) = get_json(&app, "/hello/leap").await;

    assert_eq!(json["message"], "Hello, leap! Happy birthday!");
}

#[tokio::test]
async fn test_get_unknown_user() {
    let app = app_on(ymd(2024, 3, 10));

    let (status, json) = get_json(&app, "/hello/nobody").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_get_invalid_username() {
    let app = app_on(ymd(2024, 3, 10));

    let (status, body) = get(&app, "/hello/bob42").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "INVALID_USERNAME");
}

#[tokio::test]
async fn test_overwrite_replaces_date() {
    let app = app_on(ymd(2024, 3, 10));
    put_birthday(&app, "alice", "1990-12-25").await;
    put_birthday(&app, "alice", "2000-03-10").await;

    let (_, json) = get_json(&app, "/hello/alice").await;
    assert_eq!(json["message"], "Hello, alice! Happy birthday!");

    let (_, users) = get_json(&app, "/users").await;
    assert_eq!(
        users,
        serde_json::json!([{"username": "alice", "date_of_birth": "2000-03-10"}])
    );
}

// =============================================================================
// Listing, Health, Front Page, Docs
// =============================================================================

#[tokio::test]
async fn test_list_users_sorted() {
    let app = app_on(ymd(2024, 3, 10));
    put_birthday(&app, "carol", "1985-07-05").await;
    put_birthday(&app, "alice", "2000-03-10").await;

    let (status, users) = get_json(&app, "/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        users,
        serde_json::json!([
            {"username": "alice", "date_of_birth": "2000-03-10"},
            {"username": "carol", "date_of_birth": "1985-07-05"}
        ])
    );
}

#[tokio::test]
async fn test_list_users_empty() {
    let app = app_on(ymd(2024, 3, 10));

    let (status, users) = get_json(&app, "/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(users, serde_json::json!([]));
}

#[tokio::test]
async fn test_health_in_memory() {
    let app = app_on(ymd(2024, 3, 10));

    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["services"]["storage"]["name"], "memory");
}

struct FailingProbe;

#[async_trait]
impl HealthCheck for FailingProbe {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn check(&self) -> Result<(), String> {
        Err("connection refused".to_string())
    }
}

#[tokio::test]
async fn test_health_degraded_when_storage_down() {
    let state = build_state(
        Arc::new(InMemoryBirthdayStore::new()),
        Arc::new(FixedClock::new(ymd(2024, 3, 10))),
    )
    .with_storage_health(Arc::new(FailingProbe));
    let app = create_router(state);

    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["services"]["storage"]["error"], "connection refused");
}

#[tokio::test]
async fn test_index_page() {
    let app = app_on(ymd(2024, 3, 10));

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("birthdayForm"));
    assert!(html.contains("/users"));
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app_on(ymd(2024, 3, 10));

    let (status, json) = get_json(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/hello/{username}"]["put"].is_object());
    assert!(json["paths"]["/hello/{username}"]["get"].is_object());
    assert!(json["paths"]["/users"]["get"].is_object());
}
