// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the AHEAD reasoning service.
//!
//! Exposes `POST`/`OPTIONS /generate-reasoning` and `GET /health` over axum.
//! Every response, including errors and unknown routes, carries the
//! cross-origin headers the browser client relies on.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ApiError, ErrorResponse};
pub use server::{GatewayState, ServerConfig, build_router, start_server};
