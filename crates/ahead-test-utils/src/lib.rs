// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for the AHEAD workspace.
//!
//! Provides a scripted provider double so the reasoning pipeline and the
//! HTTP surface can be tested without network access.

pub mod mock_provider;

pub use mock_provider::MockProvider;
