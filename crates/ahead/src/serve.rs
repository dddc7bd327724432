// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `ahead serve` command implementation.
//!
//! Builds the upstream provider from configuration, wraps it in the
//! reasoning service and serves the gateway until a shutdown signal.

use std::sync::Arc;
use std::time::Duration;

use ahead_config::AheadConfig;
use ahead_config::model::OpenAiConfig;
use ahead_core::{AheadError, ProviderAdapter};
use ahead_gateway::{GatewayState, ServerConfig, start_server};
use ahead_openai::OpenAiProvider;
use ahead_reasoning::ReasoningService;
use tracing::{error, info};

use crate::shutdown;

/// Pause between retries, mirrored from the provider client.
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Headroom on top of the provider's own worst case.
const DEADLINE_SLACK: Duration = Duration::from_secs(1);

/// Runs the service until SIGINT/SIGTERM.
pub async fn run_serve(config: AheadConfig) -> Result<(), AheadError> {
    init_tracing(&config.server.log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        model = %config.openai.model,
        "starting ahead"
    );

    let service = build_service(&config);
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    let cancel = shutdown::install_signal_handler();
    start_server(&server_config, GatewayState::new(service), cancel).await?;

    info!("ahead stopped");
    Ok(())
}

/// Build the reasoning service.
///
/// A missing credential is logged and leaves the service unconfigured rather
/// than aborting startup; generation requests then fail with a configuration
/// error while preflight and health checks keep answering.
pub fn build_service(config: &AheadConfig) -> ReasoningService {
    let provider: Option<Arc<dyn ProviderAdapter>> = match OpenAiProvider::new(&config.openai) {
        Ok(provider) => Some(Arc::new(provider)),
        Err(e) => {
            error!(error = %e, "upstream provider unavailable, reasoning requests will fail");
            None
        }
    };

    ReasoningService::new(
        provider,
        config.openai.model.clone(),
        config.limits.max_field_bytes,
    )
    .with_deadline(service_deadline(&config.openai))
}

/// Worst-case duration of one provider call including retries.
pub fn service_deadline(openai: &OpenAiConfig) -> Duration {
    let attempt = Duration::from_secs(openai.timeout_secs);
    let retries = openai.max_retries;
    attempt * (retries + 1) + RETRY_DELAY * retries + DEADLINE_SLACK
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the workspace crates (all prefixed
/// `ahead`) log at `log_level` and everything else at `warn`.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

fn default_directives(log_level: &str) -> String {
    format!("ahead={log_level},warn")
}
