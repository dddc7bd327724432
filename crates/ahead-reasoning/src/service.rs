// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The reasoning service: validate, prompt, call the provider, shape the result.

use std::sync::Arc;
use std::time::Duration;

use ahead_core::{AheadError, ProviderAdapter, ProviderRequest};
use tracing::{debug, info, warn};

use crate::prompt::build_prompt;
use crate::request::ReasoningInput;

/// Upper bound on generated tokens. Keeps explanations short.
pub const MAX_OUTPUT_TOKENS: u32 = 150;

/// Sampling temperature: some variety between calls, no wild divergence.
pub const TEMPERATURE: f32 = 0.7;

/// Returned in place of model output when the upstream payload carries no text.
pub const FALLBACK_REASONING: &str = "Unable to generate reasoning.";

/// Stateless reasoning generator shared by all request handlers.
///
/// The provider is `None` when startup configuration lacked a credential; in
/// that case every generation fails with [`AheadError::Config`] before any
/// upstream call.
#[derive(Clone)]
pub struct ReasoningService {
    provider: Option<Arc<dyn ProviderAdapter>>,
    model: String,
    max_field_bytes: usize,
    deadline: Option<Duration>,
}

impl std::fmt::Debug for ReasoningService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReasoningService")
            .field("provider", &self.provider.as_ref().map(|p| p.name().to_string()))
            .field("model", &self.model)
            .field("max_field_bytes", &self.max_field_bytes)
            .field("deadline", &self.deadline)
            .finish()
    }
}

impl ReasoningService {
    /// Create a service around an optional provider.
    pub fn new(
        provider: Option<Arc<dyn ProviderAdapter>>,
        model: impl Into<String>,
        max_field_bytes: usize,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            max_field_bytes,
            deadline: None,
        }
    }

    /// Bound the whole provider call, independent of the provider's own timeouts.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Whether a provider is available.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Name of the configured provider, if any.
    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.name())
    }

    /// Per-field size limit applied during validation.
    pub fn max_field_bytes(&self) -> usize {
        self.max_field_bytes
    }

    /// Generate a short explanation for the action described by `input`.
    pub async fn generate(&self, input: ReasoningInput) -> Result<String, AheadError> {
        let request = input.validate(self.max_field_bytes)?;

        info!(
            action_type = %request.action_type,
            action_title = %request.action_title,
            user_context = %request.user_context,
            "generating reasoning"
        );

        let provider = self.provider.as_ref().ok_or_else(|| {
            AheadError::Config("upstream API key is not configured".to_string())
        })?;

        let provider_request = ProviderRequest {
            model: self.model.clone(),
            messages: build_prompt(&request).into_messages(),
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
        };

        let call = provider.complete(provider_request);
        let response = match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, call)
                .await
                .map_err(|_| AheadError::Timeout { duration: deadline })??,
            None => call.await?,
        };

        debug!(
            model = ?response.model,
            finish_reason = ?response.finish_reason,
            "provider call completed"
        );

        let reasoning = match response.content {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                warn!("provider returned no completion text, using fallback");
                FALLBACK_REASONING.to_string()
            }
        };

        info!(reasoning = %reasoning, "generated reasoning");
        Ok(reasoning)
    }
}
