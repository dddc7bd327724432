// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by provider adapters and the reasoning pipeline.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Role of a message in a chat-style completion request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged message sent to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMessage {
    /// Who is speaking.
    pub role: Role,
    /// Plain text content.
    pub content: String,
}

impl ProviderMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A provider-agnostic completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    /// Model identifier understood by the provider.
    pub model: String,
    /// Ordered conversation messages.
    pub messages: Vec<ProviderMessage>,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

/// A provider-agnostic completion response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderResponse {
    /// Text of the first generated message.
    ///
    /// `None` when the upstream payload was malformed, had no choices, or
    /// carried no text. Callers decide how to present that.
    pub content: Option<String>,
    /// Model that actually served the request, when reported.
    pub model: Option<String>,
    /// Reason generation stopped, when reported.
    pub finish_reason: Option<String>,
}
