// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for an OpenAI-compatible chat-completions API.
//!
//! Provides [`OpenAiClient`] which handles authentication, bounded request
//! time, optional retry of network-level failures, and translation of
//! upstream statuses into [`AheadError`].

use std::time::Duration;

use ahead_core::AheadError;
use ahead_security::Redactor;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, error, warn};

use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};

/// Delay between attempts when retries are enabled.
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// HTTP client for chat-completion calls.
///
/// Holds a pooled `reqwest::Client` with the credential baked into its
/// default headers. Cheap to clone and safe to share across requests.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    max_retries: u32,
    redactor: Redactor,
}

/// Outcome of a failed attempt, with whether another attempt may help.
struct AttemptFailure {
    error: AheadError,
    retryable: bool,
}

impl AttemptFailure {
    fn fatal(error: AheadError) -> Self {
        Self {
            error,
            retryable: false,
        }
    }

    fn retryable(error: AheadError) -> Self {
        Self {
            error,
            retryable: true,
        }
    }
}

impl OpenAiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `api_key` - Bearer credential for the upstream API
    /// * `base_url` - API root, e.g. `https://api.openai.com/v1`
    /// * `timeout` - Upper bound for each attempt
    /// * `max_retries` - Extra attempts after a network failure or 5xx
    pub fn new(
        api_key: &str,
        base_url: &str,
        timeout: Duration,
        max_retries: u32,
    ) -> Result<Self, AheadError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| AheadError::Config(format!("invalid API key header value: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::AUTHORIZATION, auth);
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| AheadError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            timeout,
            max_retries,
            redactor: Redactor::new([api_key.to_string()]),
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends a completion request.
    ///
    /// `429` and `402` are returned immediately as [`AheadError::RateLimited`]
    /// and [`AheadError::PaymentRequired`]. Network failures, timeouts and
    /// `500`/`502`/`503` are retried up to `max_retries` times. A 2xx body
    /// that does not parse yields an empty response rather than an error.
    pub async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, AheadError> {
        let mut attempt = 0;
        loop {
            match self.attempt(request, attempt).await {
                Ok(response) => return Ok(response),
                Err(failure) if failure.retryable && attempt < self.max_retries => {
                    warn!(
                        attempt,
                        error = %failure.error,
                        "transient upstream failure, will retry"
                    );
                    attempt += 1;
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                Err(failure) => return Err(failure.error),
            }
        }
    }

    async fn attempt(
        &self,
        request: &ChatCompletionRequest,
        attempt: u32,
    ) -> Result<ChatCompletionResponse, AttemptFailure> {
        let exchange = async {
            let response = self.client.post(&self.endpoint).json(request).send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let (status, body) = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(Ok(pair)) => pair,
            Ok(Err(e)) => return Err(AttemptFailure::retryable(self.network_error(e))),
            Err(_) => {
                error!(timeout = ?self.timeout, "upstream request timed out");
                return Err(AttemptFailure::retryable(AheadError::Timeout {
                    duration: self.timeout,
                }));
            }
        };

        debug!(status = %status, attempt, "completion response received");

        if status.is_success() {
            return Ok(self.parse_success(&body));
        }

        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                warn!(body = %self.redactor.for_log(&body), "upstream rate limit exceeded");
                Err(AttemptFailure::fatal(AheadError::RateLimited))
            }
            StatusCode::PAYMENT_REQUIRED => {
                warn!(body = %self.redactor.for_log(&body), "upstream requires payment");
                Err(AttemptFailure::fatal(AheadError::PaymentRequired))
            }
            _ => {
                let detail = match serde_json::from_str::<ApiErrorResponse>(&body) {
                    Ok(api_err) => format!(
                        "{}: {}",
                        api_err.error.type_.as_deref().unwrap_or("unknown"),
                        api_err.error.message
                    ),
                    Err(_) => body.clone(),
                };
                error!(
                    status = status.as_u16(),
                    body = %self.redactor.for_log(&detail),
                    "upstream API error"
                );
                let error = AheadError::Provider {
                    message: format!("upstream returned {status}"),
                    source: None,
                };
                if is_retryable_status(status) {
                    Err(AttemptFailure::retryable(error))
                } else {
                    Err(AttemptFailure::fatal(error))
                }
            }
        }
    }

    fn network_error(&self, e: reqwest::Error) -> AheadError {
        error!(
            error = %self.redactor.for_log(&e.to_string()),
            is_timeout = e.is_timeout(),
            is_connect = e.is_connect(),
            "upstream request failed"
        );
        if e.is_timeout() {
            AheadError::Timeout {
                duration: self.timeout,
            }
        } else {
            AheadError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            }
        }
    }

    fn parse_success(&self, body: &str) -> ChatCompletionResponse {
        serde_json::from_str(body).unwrap_or_else(|e| {
            warn!(
                error = %e,
                body = %self.redactor.for_log(body),
                "malformed completion payload"
            );
            ChatCompletionResponse::default()
        })
    }
}

/// Server-side statuses worth another attempt.
fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 500 | 502 | 503)
}
