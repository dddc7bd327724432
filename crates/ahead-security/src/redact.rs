// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secret redaction for log output.
//!
//! Two complementary mechanisms:
//! 1. **Pattern-based**: known credential shapes (provider keys, bearer tokens).
//! 2. **Exact-match**: values known at runtime, such as the configured API key.

use std::sync::LazyLock;

use regex::Regex;

/// Known secret shapes to redact from output.
static REDACTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Project-scoped provider keys: sk-proj-...
        Regex::new(r"sk-proj-[a-zA-Z0-9_\-]{20,}").unwrap(),
        // Classic provider keys: sk-...
        Regex::new(r"sk-[a-zA-Z0-9]{20,}").unwrap(),
        // Bearer tokens in headers or echoed error bodies
        Regex::new(r"Bearer\s+[a-zA-Z0-9._\-]{10,}").unwrap(),
    ]
});

/// The redaction placeholder.
pub const REDACTED: &str = "[REDACTED]";

/// Longest text kept by [`Redactor::for_log`] before truncation.
const MAX_LOG_CHARS: usize = 2048;

/// Redact secrets from `input` using the built-in patterns and exact `known` values.
///
/// Known values are replaced longest first so a secret that contains another
/// secret is removed whole.
pub fn redact(input: &str, known: &[String]) -> String {
    let mut result = input.to_string();

    for pattern in REDACTION_PATTERNS.iter() {
        result = pattern.replace_all(&result, REDACTED).into_owned();
    }

    let mut sorted: Vec<&String> = known.iter().filter(|v| !v.is_empty()).collect();
    sorted.sort_by_key(|v| std::cmp::Reverse(v.len()));
    for value in sorted {
        result = result.replace(value.as_str(), REDACTED);
    }

    result
}

/// Redacts a fixed set of runtime secrets.
///
/// Cloned into each provider client; holds no mutable state.
#[derive(Clone, Default)]
pub struct Redactor {
    known: Vec<String>,
}

impl Redactor {
    /// Create a redactor that also removes the given exact values.
    pub fn new(known: impl IntoIterator<Item = String>) -> Self {
        Self {
            known: known.into_iter().filter(|v| !v.is_empty()).collect(),
        }
    }

    /// Redact secrets from `input`.
    pub fn redact(&self, input: &str) -> String {
        redact(input, &self.known)
    }

    /// Redact and truncate text destined for a log line.
    pub fn for_log(&self, input: &str) -> String {
        let redacted = self.redact(input);
        match redacted.char_indices().nth(MAX_LOG_CHARS) {
            Some((cut, _)) => format!("{}...[truncated]", &redacted[..cut]),
            None => redacted,
        }
    }
}

impl std::fmt::Debug for Redactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Redactor")
            .field("known", &self.known.len())
            .finish()
    }
}
