// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock provider adapter for deterministic testing.
//!
//! `MockProvider` implements `ProviderAdapter` with pre-scripted outcomes and
//! records every request it receives, so tests can assert both what was sent
//! and whether the upstream was reached at all.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use ahead_core::{AheadError, PluginAdapter, ProviderAdapter, ProviderRequest, ProviderResponse};

/// Text returned once the scripted outcomes run out.
pub const DEFAULT_MOCK_TEXT: &str = "mock reasoning";

/// A provider that replays scripted outcomes in FIFO order.
pub struct MockProvider {
    outcomes: Mutex<VecDeque<Result<ProviderResponse, AheadError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl MockProvider {
    /// Create a mock with no scripted outcomes.
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            delay: None,
        }
    }

    /// Create a mock that answers with the given texts, one per call.
    pub fn with_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_outcomes(texts.into_iter().map(|t| Ok(text_response(t))))
    }

    /// Create a mock that replays arbitrary outcomes, one per call.
    pub fn with_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Result<ProviderResponse, AheadError>>,
    {
        let mock = Self::new();
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            ..mock
        }
    }

    /// Sleep for `delay` before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `complete` calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received so far, in call order.
    pub async fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().await.clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// A response carrying `text` as its content.
pub fn text_response(text: impl Into<String>) -> ProviderResponse {
    ProviderResponse {
        content: Some(text.into()),
        model: Some("mock-model".to_string()),
        finish_reason: Some("stop".to_string()),
    }
}

impl PluginAdapter for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }
}

#[async_trait]
impl ProviderAdapter for MockProvider {
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, AheadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().await.push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(text_response(DEFAULT_MOCK_TEXT)))
    }
}
