// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping from [`AheadError`] to HTTP responses.

use ahead_core::AheadError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Body returned to clients for every failure.
pub const GENERIC_UPSTREAM_ERROR: &str = "upstream error";

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// An [`AheadError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub AheadError);

impl From<AheadError> for ApiError {
    fn from(err: AheadError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code and client-facing message for this error.
    ///
    /// Provider, timeout and internal failures share one generic message;
    /// their details only reach the log.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            AheadError::Validation(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            AheadError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, self.0.to_string()),
            AheadError::PaymentRequired => (StatusCode::PAYMENT_REQUIRED, self.0.to_string()),
            AheadError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()),
            AheadError::Provider { .. } | AheadError::Timeout { .. } | AheadError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_UPSTREAM_ERROR.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            let cause = std::error::Error::source(&self.0)
                .map(ToString::to_string)
                .unwrap_or_default();
            error!(error = %self.0, cause = %cause, status = status.as_u16(), "reasoning request failed");
        }
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
