// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inbound request and outbound response bodies.

use ahead_core::AheadError;
use serde::{Deserialize, Serialize};

/// Raw request body for `POST /generate-reasoning`.
///
/// Every field is optional at this stage so a missing field becomes a
/// validation error with a useful message rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasoningInput {
    /// Kind of action, e.g. `order`, `booking`, `nudge`.
    #[serde(default)]
    pub action_type: Option<String>,
    /// Free-text description of the action taken.
    #[serde(default)]
    pub action_title: Option<String>,
    /// Free-text description of the user's situation.
    #[serde(default)]
    pub user_context: Option<String>,
}

/// A validated reasoning request: all fields present, non-blank and within size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasoningRequest {
    pub action_type: String,
    pub action_title: String,
    pub user_context: String,
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningResponse {
    /// Generated explanation, passed through as returned by the model.
    pub reasoning: String,
}

impl ReasoningInput {
    /// Validate the raw body into a [`ReasoningRequest`].
    ///
    /// Fields are kept verbatim; whitespace only matters for the emptiness
    /// check. `max_field_bytes` bounds each field independently.
    pub fn validate(self, max_field_bytes: usize) -> Result<ReasoningRequest, AheadError> {
        let fields = [
            ("actionType", &self.action_type),
            ("actionTitle", &self.action_title),
            ("userContext", &self.user_context),
        ];

        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(AheadError::Validation(format!(
                "missing or empty required field(s): {}",
                missing.join(", ")
            )));
        }

        if let Some((name, value)) = fields
            .iter()
            .find(|(_, value)| value.as_deref().is_some_and(|v| v.len() > max_field_bytes))
        {
            let len = value.as_deref().map_or(0, str::len);
            return Err(AheadError::Validation(format!(
                "{name} is {len} bytes, the limit is {max_field_bytes}"
            )));
        }

        // Presence was checked above.
        Ok(ReasoningRequest {
            action_type: self.action_type.unwrap_or_default(),
            action_title: self.action_title.unwrap_or_default(),
            user_context: self.user_context.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(action_type: &str, action_title: &str, user_context: &str) -> ReasoningInput {
        ReasoningInput {
            action_type: Some(action_type.to_string()),
            action_title: Some(action_title.to_string()),
            user_context: Some(user_context.to_string()),
        }
    }

    #[test]
    fn deserializes_camel_case_body() {
        let json = r#"{"actionType":"order","actionTitle":"Electrolyte pack","userContext":"flying to Denver"}"#;
        let body: ReasoningInput = serde_json::from_str(json).unwrap();
        assert_eq!(body.action_type.as_deref(), Some("order"));
        assert_eq!(body.action_title.as_deref(), Some("Electrolyte pack"));
        assert_eq!(body.user_context.as_deref(), Some("flying to Denver"));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let body: ReasoningInput = serde_json::from_str(r#"{"actionType":"order"}"#).unwrap();
        assert!(body.action_title.is_none());
        assert!(body.user_context.is_none());
    }

    #[test]
    fn valid_input_passes_verbatim() {
        let req = input("booking", "  IV therapy  ", "recovering from a cold")
            .validate(2048)
            .unwrap();
        assert_eq!(req.action_type, "booking");
        assert_eq!(req.action_title, "  IV therapy  ");
        assert_eq!(req.user_context, "recovering from a cold");
    }

    #[test]
    fn reports_every_missing_field() {
        let err = ReasoningInput {
            action_type: Some("order".into()),
            ..Default::default()
        }
        .validate(2048)
        .unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, AheadError::Validation(_)));
        assert!(msg.contains("actionTitle"));
        assert!(msg.contains("userContext"));
        assert!(!msg.contains("actionType"));
    }

    #[test]
    fn blank_field_counts_as_missing() {
        let err = input("order", "   ", "ctx").validate(2048).unwrap_err();
        assert!(err.to_string().contains("actionTitle"));
    }

    #[test]
    fn oversize_field_is_rejected() {
        let long = "a".repeat(2049);
        let err = input("order", "title", &long).validate(2048).unwrap_err();
        assert!(matches!(err, AheadError::Validation(_)));
        assert!(err.to_string().contains("userContext is 2049 bytes"));
    }

    #[test]
    fn field_at_limit_is_accepted() {
        let exact = "a".repeat(16);
        assert!(input("order", &exact, "ctx").validate(16).is_ok());
    }

    #[test]
    fn response_serializes_reasoning_key() {
        let json = serde_json::to_string(&ReasoningResponse {
            reasoning: "Because.".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"reasoning":"Because."}"#);
    }
}
