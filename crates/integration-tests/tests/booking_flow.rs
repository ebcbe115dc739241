//! Integration tests for booking writes and capacity accounting.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied (`DATABASE_URL`)
//! - A seeded catalog (cargo run -p iron-haven-cli -- seed)
//! - The API server running (cargo run -p iron-haven-api)
//!
//! Run with: cargo test -p iron-haven-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
fn api_base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Direct database access for fixtures and assertions.
async fn connect_pool() -> PgPool {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgPool::connect(&url).await.expect("database connection")
}

/// Insert a storage unit fixture with the given availability, returning its id.
async fn insert_unit(pool: &PgPool, name: &str, available: i32) -> Uuid {
    sqlx::query_scalar(
        r"
        INSERT INTO storage_units (name, size, price, features, total_units, available_units)
        VALUES ($1, 'Single bike space', 149, ARRAY['24/7 Access'], $2, $3)
        RETURNING id
        ",
    )
    .bind(name)
    .bind(available.max(1))
    .bind(available)
    .fetch_one(pool)
    .await
    .expect("insert fixture unit")
}

/// Count bookings referencing a unit.
async fn booking_count(pool: &PgPool, unit_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM storage_bookings WHERE storage_unit_id = $1")
        .bind(unit_id)
        .fetch_one(pool)
        .await
        .expect("count bookings")
}

fn valid_booking_body(unit_id: Uuid) -> Value {
    json!({
        "storageUnitId": unit_id.to_string(),
        "customerName": "Ada Rider",
        "customerEmail": "ada@example.com",
        "customerPhone": "555-0100",
        "bikeInfo": "1996 Ducati 916",
        "startDate": "2026-10-01"
    })
}

#[tokio::test]
#[ignore = "requires running server and database"]
async fn test_last_unit_books_exactly_once() {
    let pool = connect_pool().await;
    let base = api_base_url();
    let client = Client::new();

    let unit_id = insert_unit(&pool, "Last Unit Test", 1).await;

    // First booking takes the last unit.
    let resp = client
        .post(format!("{base}/api/storage-bookings"))
        .json(&valid_booking_body(unit_id))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let booking: Value = resp.json().await.expect("json body");
    assert_eq!(booking["storageUnitId"], unit_id.to_string());
    assert_eq!(booking["status"], "pending");
    assert!(booking["createdAt"].is_string());

    // The counter landed at zero.
    let unit: Value = reqwest::get(format!("{base}/api/storage-units/{unit_id}"))
        .await
        .expect("request failed")
        .json()
        .await
        .expect("json body");
    assert_eq!(unit["availableUnits"], 0);

    // Second booking fails with the capacity error and writes nothing.
    let resp = client
        .post(format!("{base}/api/storage-bookings"))
        .json(&valid_booking_body(unit_id))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["error"], "No units available");

    assert_eq!(booking_count(&pool, unit_id).await, 1);

    // The counter never went negative.
    let unit: Value = reqwest::get(format!("{base}/api/storage-units/{unit_id}"))
        .await
        .expect("request failed")
        .json()
        .await
        .expect("json body");
    assert_eq!(unit["availableUnits"], 0);
}

#[tokio::test]
#[ignore = "requires running server and database"]
async fn test_sold_out_unit_writes_nothing() {
    let pool = connect_pool().await;
    let unit_id = insert_unit(&pool, "Sold Out Test", 0).await;

    let resp = Client::new()
        .post(format!("{}/api/storage-bookings", api_base_url()))
        .json(&valid_booking_body(unit_id))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["error"], "No units available");

    // The rejected reservation rolled back: no booking row, counter untouched.
    assert_eq!(booking_count(&pool, unit_id).await, 0);
    let unit: Value = reqwest::get(format!(
        "{}/api/storage-units/{unit_id}",
        api_base_url()
    ))
    .await
    .expect("request failed")
    .json()
    .await
    .expect("json body");
    assert_eq!(unit["availableUnits"], 0);
}

#[tokio::test]
#[ignore = "requires running server and database"]
async fn test_booking_unknown_unit_is_404() {
    let resp = Client::new()
        .post(format!("{}/api/storage-bookings", api_base_url()))
        .json(&valid_booking_body(Uuid::new_v4()))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["error"], "Storage unit not found");
}

#[tokio::test]
#[ignore = "requires running server and database"]
async fn test_invalid_booking_writes_nothing() {
    let pool = connect_pool().await;
    let unit_id = insert_unit(&pool, "Validation Test", 5).await;

    let resp = Client::new()
        .post(format!("{}/api/storage-bookings", api_base_url()))
        .json(&json!({
            "storageUnitId": unit_id.to_string(),
            "customerName": "",
            "customerEmail": "not-an-email",
            "startDate": "2026-10-01"
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("json body");
    let violations = body["error"].as_array().expect("violation list");
    let fields: Vec<&str> = violations
        .iter()
        .map(|v| v["field"].as_str().expect("field"))
        .collect();
    assert!(fields.contains(&"customerName"));
    assert!(fields.contains(&"customerEmail"));

    // No row written, counter untouched.
    assert_eq!(booking_count(&pool, unit_id).await, 0);
    let unit: Value = reqwest::get(format!(
        "{}/api/storage-units/{unit_id}",
        api_base_url()
    ))
    .await
    .expect("request failed")
    .json()
    .await
    .expect("json body");
    assert_eq!(unit["availableUnits"], 5);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_service_booking_created_pending() {
    let base = api_base_url();
    let services: Vec<Value> = reqwest::get(format!("{base}/api/services"))
        .await
        .expect("request failed")
        .json()
        .await
        .expect("json body");
    let service_id = services.first().expect("seeded service")["id"]
        .as_str()
        .expect("id")
        .to_owned();

    let resp = Client::new()
        .post(format!("{base}/api/service-bookings"))
        .json(&json!({
            "serviceId": service_id,
            "customerName": "Ada Rider",
            "customerEmail": "ada@example.com",
            "bikeInfo": "1996 Ducati 916",
            "preferredDate": "2026-04-12",
            "preferredTime": "morning",
            "notes": "chain is loose"
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let booking: Value = resp.json().await.expect("json body");
    assert_eq!(booking["serviceId"], service_id);
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["preferredTime"], "morning");
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_service_booking_unknown_service_is_404() {
    let resp = Client::new()
        .post(format!("{}/api/service-bookings", api_base_url()))
        .json(&json!({
            "serviceId": Uuid::new_v4().to_string(),
            "customerName": "Ada Rider",
            "customerEmail": "ada@example.com",
            "preferredDate": "2026-04-12"
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_membership_signup_flow() {
    let base = api_base_url();
    let tiers: Vec<Value> = reqwest::get(format!("{base}/api/membership-tiers"))
        .await
        .expect("request failed")
        .json()
        .await
        .expect("json body");
    let tier_id = tiers.first().expect("seeded tier")["id"]
        .as_str()
        .expect("id")
        .to_owned();

    let resp = Client::new()
        .post(format!("{base}/api/membership-signups"))
        .json(&json!({
            "tierId": tier_id,
            "customerName": "Ada Rider",
            "customerEmail": "ada@example.com"
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let signup: Value = resp.json().await.expect("json body");
    assert_eq!(signup["tierId"], tier_id);
    assert_eq!(signup["status"], "pending");
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_membership_signup_unknown_tier_is_404() {
    let resp = Client::new()
        .post(format!("{}/api/membership-signups", api_base_url()))
        .json(&json!({
            "tierId": Uuid::new_v4().to_string(),
            "customerName": "Ada Rider",
            "customerEmail": "ada@example.com"
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["error"], "Membership tier not found");
}
