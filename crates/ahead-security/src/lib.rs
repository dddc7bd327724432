// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Security helpers for the AHEAD reasoning service.
//!
//! Upstream error bodies and request metadata are logged for operators but
//! must never carry credentials into log storage.

pub mod redact;

pub use redact::{REDACTED, Redactor, redact};
