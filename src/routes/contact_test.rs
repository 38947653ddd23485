use axum::body::{Body, to_bytes};
use axum::http::Request;
use serde_json::{Value, json};
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers;

async fn post(state: AppState, body: impl Into<Body>) -> (StatusCode, Value) {
    let app = crate::routes::api_routes(state);
    let response = app
        .oneshot(
            Request::post("/api/contact")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn valid_body() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "subject": "Hi",
        "message": "We would like to talk about a pilot."
    })
}

#[tokio::test]
async fn valid_submission_is_stored() {
    let (state, store) = test_helpers::test_app_state();
    let (status, body) = post(state, valid_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(store.count(), 1);
    assert_eq!(store.rows.lock().unwrap()[0].name, "Ada Lovelace");
}

#[tokio::test]
async fn invalid_fields_are_listed() {
    let (state, store) = test_helpers::test_app_state();
    let payload = json!({ "name": "Al", "email": "not-an-email", "subject": "Hi", "message": "short" });
    let (status, body) = post(state, payload.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    let fields: Vec<&str> = body["details"].as_array().unwrap().iter().map(|d| d["field"].as_str().unwrap()).collect();
    assert_eq!(fields, ["name", "email", "message"]);
    assert!(body["details"][0]["message"].as_str().unwrap().contains("at least 3"));
    assert_eq!(store.count(), 0);
}

#[tokio::test]
async fn missing_fields_fail_validation_not_parsing() {
    let (state, _store) = test_helpers::test_app_state();
    let (status, body) = post(state, json!({ "name": "Ada" }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let (state, store) = test_helpers::test_app_state();
    let (status, body) = post(state, "{ not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid request body" }));
    assert_eq!(store.count(), 0);
}

#[tokio::test]
async fn wrong_field_types_are_rejected() {
    let (state, _store) = test_helpers::test_app_state();
    let (status, body) = post(state, json!({ "name": 42 }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn storage_failure_is_500_with_details() {
    let (status, body) = post(test_helpers::failing_app_state(), valid_body().to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to submit contact form");
    assert!(body["details"].as_str().unwrap().contains("database error"));
}

#[tokio::test]
async fn healthz_is_ok() {
    let (state, _store) = test_helpers::test_app_state();
    let response = crate::routes::api_routes(state)
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
