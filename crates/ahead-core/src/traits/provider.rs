// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for upstream text-generation APIs.

use async_trait::async_trait;

use crate::error::AheadError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{ProviderRequest, ProviderResponse};

/// Adapter for an upstream chat-completion provider.
///
/// Implementations own their transport and credentials. They translate
/// upstream failures into the [`AheadError`] taxonomy so callers never see
/// raw upstream statuses or bodies.
#[async_trait]
pub trait ProviderAdapter: PluginAdapter {
    /// Sends a completion request and returns the normalized response.
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, AheadError>;
}
