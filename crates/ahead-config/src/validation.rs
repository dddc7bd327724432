// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as bind addresses, URL schemes and numeric ranges.

use crate::diagnostic::ConfigError;
use crate::model::AheadConfig;

/// Longest upstream timeout accepted, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// Most retries accepted for a single upstream call.
pub const MAX_RETRIES: u32 = 5;

/// Largest per-field size limit accepted, in bytes.
pub const MAX_FIELD_BYTES: usize = 64 * 1024;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
///
/// A missing API key is deliberately not an error here: the service still
/// starts so preflight and health routes keep answering, and the reasoning
/// route reports the configuration problem per request.
pub fn validate_config(config: &AheadConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    let base_url = config.openai.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(ConfigError::Validation {
            message: format!("openai.base_url `{base_url}` must start with http:// or https://"),
        });
    }

    if config.openai.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "openai.model must not be empty".to_string(),
        });
    }

    if config.openai.timeout_secs == 0 || config.openai.timeout_secs > MAX_TIMEOUT_SECS {
        errors.push(ConfigError::Validation {
            message: format!(
                "openai.timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}, got {}",
                config.openai.timeout_secs
            ),
        });
    }

    if config.openai.max_retries > MAX_RETRIES {
        errors.push(ConfigError::Validation {
            message: format!(
                "openai.max_retries must be at most {MAX_RETRIES}, got {}",
                config.openai.max_retries
            ),
        });
    }

    if !(1..=MAX_FIELD_BYTES).contains(&config.limits.max_field_bytes) {
        errors.push(ConfigError::Validation {
            message: format!(
                "limits.max_field_bytes must be between 1 and {MAX_FIELD_BYTES}, got {}",
                config.limits.max_field_bytes
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
