// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;
use std::time::Instant;

use ahead_core::AheadError;
use ahead_reasoning::ReasoningService;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::cors::apply_cors_headers;
use crate::handlers;

/// Room for JSON punctuation and key names on top of the three field values.
const BODY_OVERHEAD_BYTES: usize = 1024;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Reasoning pipeline shared read-only by all requests.
    pub service: Arc<ReasoningService>,
    /// Process start time for uptime calculation.
    pub start_time: Instant,
}

impl GatewayState {
    pub fn new(service: ReasoningService) -> Self {
        Self {
            service: Arc::new(service),
            start_time: Instant::now(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the application router.
///
/// Routes:
/// - OPTIONS /generate-reasoning (preflight)
/// - POST /generate-reasoning
/// - GET /health
///
/// Cross-origin headers are stamped on every response, fallback included.
/// Bodies over the limit reach the handler as a JSON rejection and come back
/// as a JSON `413`.
pub fn build_router(state: GatewayState) -> Router {
    let limit = body_limit(state.service.max_field_bytes());

    Router::new()
        .route(
            "/generate-reasoning",
            post(handlers::generate_reasoning).options(handlers::preflight),
        )
        .route("/health", get(handlers::get_health))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(limit))
        .layer(axum_middleware::map_response(apply_cors_headers))
        .layer(TraceLayer::new_for_http())
}

fn body_limit(max_field_bytes: usize) -> usize {
    max_field_bytes
        .saturating_mul(4)
        .saturating_add(BODY_OVERHEAD_BYTES)
}

/// Serve the gateway until `shutdown` is cancelled.
///
/// In-flight requests are allowed to finish after cancellation.
pub async fn start_server(
    config: &ServerConfig,
    state: GatewayState,
    shutdown: CancellationToken,
) -> Result<(), AheadError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AheadError::Config(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AheadError::Internal(format!("gateway server error: {e}")))?;

    tracing::info!("Gateway server stopped");
    Ok(())
}
