// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reasoning generation for the AHEAD assistant.
//!
//! [`prompt`] maps a validated request to a system/user prompt pair without
//! any I/O. [`service`] wraps that with input validation, the provider call
//! and response shaping.

pub mod prompt;
pub mod request;
pub mod service;

pub use prompt::{ActionKind, Prompt, SYSTEM_PROMPT, build_prompt};
pub use request::{ReasoningInput, ReasoningRequest, ReasoningResponse};
pub use service::{FALLBACK_REASONING, MAX_OUTPUT_TOKENS, ReasoningService, TEMPERATURE};
