// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers.
//!
//! Handles OPTIONS/POST /generate-reasoning and GET /health.

use ahead_core::AheadError;
use ahead_reasoning::{ReasoningInput, ReasoningResponse};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, ErrorResponse};
use crate::server::GatewayState;

/// Response body for GET /health.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since the router was built.
    pub uptime_secs: u64,
    /// Whether an upstream credential was available at startup.
    pub provider_configured: bool,
    /// Name of the upstream adapter, when one is configured.
    pub provider: Option<String>,
}

/// OPTIONS /generate-reasoning
///
/// Preflight: empty `200`. The CORS middleware adds the headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// POST /generate-reasoning
///
/// Validates the body, asks the reasoning service for an explanation, and
/// returns `{ "reasoning": ... }`. Malformed JSON is a `400`, except for an
/// oversize body which keeps its `413`.
pub async fn generate_reasoning(
    State(state): State<GatewayState>,
    payload: Result<Json<ReasoningInput>, JsonRejection>,
) -> Response {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return reject(rejection),
    };

    match state.service.generate(input).await {
        Ok(reasoning) => Json(ReasoningResponse { reasoning }).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}

fn reject(rejection: JsonRejection) -> Response {
    debug!(reason = %rejection.body_text(), "rejected request body");
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse::new("request body too large")),
        )
            .into_response();
    }
    ApiError::from(AheadError::Validation(rejection.body_text())).into_response()
}

/// GET /health
///
/// Liveness only; never contacts the upstream.
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        provider_configured: state.service.is_configured(),
        provider: state.service.provider_name().map(str::to_string),
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            uptime_secs: 42,
            provider_configured: true,
            provider: Some("openai".to_string()),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"uptime_secs\":42"));
        assert!(json.contains("\"provider_configured\":true"));
        assert!(json.contains("\"provider\":\"openai\""));
    }

    #[tokio::test]
    async fn preflight_is_ok() {
        assert_eq!(preflight().await, StatusCode::OK);
    }
}
