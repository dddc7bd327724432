// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the AHEAD reasoning service.

use thiserror::Error;

/// The primary error type used across provider adapters and the reasoning pipeline.
///
/// Each variant corresponds to one class of the client-facing error taxonomy.
/// The gateway decides which variants expose their message to callers.
#[derive(Debug, Error)]
pub enum AheadError {
    /// Configuration errors (missing API key, invalid TOML, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid inbound request (missing, empty or oversize fields, bad JSON).
    #[error("invalid request: {0}")]
    Validation(String),

    /// The upstream provider rejected the call with HTTP 429.
    #[error("rate limit exceeded, please try again later.")]
    RateLimited,

    /// The upstream provider rejected the call with HTTP 402.
    #[error("payment required, please add credits to the upstream account.")]
    PaymentRequired,

    /// Any other upstream failure: unexpected status or network error.
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The upstream call exceeded its time budget.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
