// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI-compatible provider adapter for the AHEAD reasoning service.
//!
//! This crate implements [`ProviderAdapter`] for the chat-completions API,
//! translating provider-agnostic requests into the wire format and upstream
//! failures into the [`AheadError`] taxonomy.

pub mod client;
pub mod types;

use std::time::Duration;

use ahead_config::model::OpenAiConfig;
use ahead_core::{AheadError, PluginAdapter, ProviderAdapter, ProviderRequest, ProviderResponse};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::client::OpenAiClient;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Chat-completions provider implementing [`ProviderAdapter`].
///
/// API key resolution happens in configuration loading (`openai.api_key`,
/// `AHEAD_OPENAI_API_KEY`, then `OPENAI_API_KEY`); construction fails when
/// none of them is set.
pub struct OpenAiProvider {
    client: OpenAiClient,
}

impl OpenAiProvider {
    /// Creates a provider from the `[openai]` configuration section.
    pub fn new(config: &OpenAiConfig) -> Result<Self, AheadError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AheadError::Config(
                    "upstream API key is not configured (set openai.api_key, \
                     AHEAD_OPENAI_API_KEY or OPENAI_API_KEY)"
                        .into(),
                )
            })?;

        let client = OpenAiClient::new(
            api_key,
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
            config.max_retries,
        )?;

        info!(
            model = %config.model,
            endpoint = client.endpoint(),
            timeout_secs = config.timeout_secs,
            max_retries = config.max_retries,
            "OpenAI provider initialized"
        );

        Ok(Self { client })
    }

    fn to_chat_request(request: &ProviderRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: request.model.clone(),
            messages: request
                .messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    fn to_provider_response(response: &ChatCompletionResponse) -> ProviderResponse {
        ProviderResponse {
            content: response.first_text().map(str::to_string),
            model: response.model.clone(),
            finish_reason: response.first_finish_reason().map(str::to_string),
        }
    }
}

impl PluginAdapter for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiProvider {
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, AheadError> {
        let chat_request = Self::to_chat_request(&request);
        let response = self.client.complete(&chat_request).await?;
        debug!(
            id = response.id.as_deref().unwrap_or("-"),
            choices = response.choices.len(),
            "completion received"
        );
        Ok(Self::to_provider_response(&response))
    }
}
