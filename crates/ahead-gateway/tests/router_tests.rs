// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process HTTP tests for the gateway router.

use std::sync::Arc;
use std::time::Duration;

use ahead_core::{AheadError, ProviderAdapter, ProviderResponse};
use ahead_gateway::{ErrorResponse, GatewayState, build_router};
use ahead_reasoning::{FALLBACK_REASONING, ReasoningResponse, ReasoningService};
use ahead_test_utils::MockProvider;
use axum::{Router, body::Body};
use http::{Method, Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;

const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

fn router_with(provider: Option<Arc<MockProvider>>) -> Router {
    let provider = provider.map(|p| p as Arc<dyn ProviderAdapter>);
    let service = ReasoningService::new(provider, "gpt-4o-mini", 2048);
    build_router(GatewayState::new(service))
}

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/generate-reasoning")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn valid_body() -> String {
    json!({
        "actionType": "order",
        "actionTitle": "Vitamin D3 supplements",
        "userContext": "a remote worker who rarely goes outside in winter"
    })
    .to_string()
}

fn assert_cors(response: &axum::response::Response) {
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], ALLOW_HEADERS);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn error_of(response: axum::response::Response) -> String {
    let body: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    body.error
}

#[tokio::test]
async fn preflight_returns_empty_200_with_cors() {
    let app = router_with(None);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/generate-reasoning")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn success_returns_reasoning() {
    let mock = Arc::new(MockProvider::with_texts([
        "Short days cut your sun exposure. Ordering now keeps levels steady.",
    ]));
    let app = router_with(Some(mock.clone()));

    let response = app.oneshot(post_json(valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    let body: ReasoningResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(body.reasoning.starts_with("Short days"));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn prompt_reaches_provider() {
    let mock = Arc::new(MockProvider::with_texts(["ok"]));
    let app = router_with(Some(mock.clone()));

    app.oneshot(post_json(valid_body())).await.unwrap();

    let requests = mock.requests().await;
    assert_eq!(requests.len(), 1);
    let user = &requests[0].messages[1].content;
    assert!(user.contains("You proactively ordered: \"Vitamin D3 supplements\""));
    assert!(user.starts_with("The user is a remote worker"));
}

#[tokio::test]
async fn missing_field_is_400_without_upstream_call() {
    let mock = Arc::new(MockProvider::new());
    let app = router_with(Some(mock.clone()));

    let body = json!({"actionType": "order", "actionTitle": "Vitamin D3"}).to_string();
    let response = app.oneshot(post_json(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors(&response);
    assert!(error_of(response).await.contains("userContext"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn empty_field_is_400_without_upstream_call() {
    let mock = Arc::new(MockProvider::new());
    let app = router_with(Some(mock.clone()));

    let body = json!({
        "actionType": "booking",
        "actionTitle": "   ",
        "userContext": "a new parent"
    })
    .to_string();
    let response = app.oneshot(post_json(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let mock = Arc::new(MockProvider::new());
    let app = router_with(Some(mock.clone()));

    let response = app.oneshot(post_json("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors(&response);
    assert!(!error_of(response).await.is_empty());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn wrong_field_type_is_400() {
    let mock = Arc::new(MockProvider::new());
    let app = router_with(Some(mock.clone()));

    let body = json!({"actionType": 7, "actionTitle": "x", "userContext": "y"}).to_string();
    let response = app.oneshot(post_json(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn oversize_field_is_400() {
    let mock = Arc::new(MockProvider::new());
    let app = router_with(Some(mock.clone()));

    let body = json!({
        "actionType": "order",
        "actionTitle": "a".repeat(2049),
        "userContext": "y"
    })
    .to_string();
    let response = app.oneshot(post_json(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_of(response).await.contains("actionTitle"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn huge_body_is_rejected() {
    let app = router_with(Some(Arc::new(MockProvider::new())));

    let body = format!(r#"{{"actionType":"{}"}}"#, "a".repeat(64 * 1024));
    let response = app.oneshot(post_json(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_cors(&response);
    assert_eq!(error_of(response).await, "request body too large");
}

#[tokio::test]
async fn huge_body_with_content_length_gets_json_413() {
    let mock = Arc::new(MockProvider::new());
    let app = router_with(Some(mock.clone()));

    let body = format!(r#"{{"actionType":"{}"}}"#, "a".repeat(64 * 1024));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/generate-reasoning")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_cors(&response);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(error_of(response).await, "request body too large");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn rate_limit_maps_to_429() {
    let mock = Arc::new(MockProvider::with_outcomes([Err(AheadError::RateLimited)]));
    let app = router_with(Some(mock));

    let response = app.oneshot(post_json(valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_cors(&response);
    assert!(error_of(response).await.contains("rate limit"));
}

#[tokio::test]
async fn payment_required_maps_to_402() {
    let mock = Arc::new(MockProvider::with_outcomes([Err(AheadError::PaymentRequired)]));
    let app = router_with(Some(mock));

    let response = app.oneshot(post_json(valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    assert_cors(&response);
    assert!(error_of(response).await.contains("credits"));
}

#[tokio::test]
async fn provider_failure_is_generic_500() {
    let mock = Arc::new(MockProvider::with_outcomes([Err(AheadError::Provider {
        message: "upstream returned 401 Unauthorized: invalid key sk-test".into(),
        source: None,
    })]));
    let app = router_with(Some(mock));

    let response = app.oneshot(post_json(valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&response);
    let error = error_of(response).await;
    assert_eq!(error, "upstream error");
    assert!(!error.contains("401"));
}

#[tokio::test]
async fn timeout_is_generic_500() {
    let mock = Arc::new(MockProvider::with_outcomes([Err(AheadError::Timeout {
        duration: Duration::from_secs(15),
    })]));
    let app = router_with(Some(mock));

    let response = app.oneshot(post_json(valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_of(response).await, "upstream error");
}

#[tokio::test]
async fn empty_completion_uses_fallback() {
    let mock = Arc::new(MockProvider::with_outcomes([Ok(ProviderResponse::default())]));
    let app = router_with(Some(mock));

    let response = app.oneshot(post_json(valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: ReasoningResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body.reasoning, FALLBACK_REASONING);
}

#[tokio::test]
async fn unconfigured_provider_is_500_config_error() {
    let app = router_with(None);

    let response = app.oneshot(post_json(valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&response);
    assert!(error_of(response).await.contains("API key"));
}

#[tokio::test]
async fn unconfigured_provider_still_validates_first() {
    let app = router_with(None);

    let response = app.oneshot(post_json("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_provider_state() {
    let app = router_with(None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["provider_configured"], false);
    assert!(body["provider"].is_null());
}

#[tokio::test]
async fn health_names_configured_provider() {
    let app = router_with(Some(Arc::new(MockProvider::new())));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["provider_configured"], true);
    assert_eq!(body["provider"], "mock-provider");
}

#[tokio::test]
async fn unknown_route_is_404_with_cors() {
    let app = router_with(None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_cors(&response);
}

#[tokio::test]
async fn get_on_reasoning_route_is_405_with_cors() {
    let app = router_with(None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/generate-reasoning")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_cors(&response);
}
