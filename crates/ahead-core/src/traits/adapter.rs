// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait that all plugin adapters must implement.

/// The base trait for all AHEAD adapters.
///
/// Carries the identity reported by `/health` and startup logs.
pub trait PluginAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;
}
