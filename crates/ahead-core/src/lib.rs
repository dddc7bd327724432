// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the AHEAD reasoning service.
//!
//! This crate provides the error taxonomy, the provider adapter traits and
//! the provider-agnostic request/response types used throughout the
//! workspace.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AheadError;
pub use traits::{PluginAdapter, ProviderAdapter};
pub use types::{ProviderMessage, ProviderRequest, ProviderResponse, Role};
