// SPDX-FileCopyrightText: 2026 AHEAD Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Signal handling for graceful shutdown.
//!
//! SIGTERM and SIGINT (Ctrl+C) cancel a [`CancellationToken`] that the HTTP
//! server watches; in-flight requests finish before the process exits.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Installs handlers for SIGTERM and SIGINT.
///
/// Returns a token that is cancelled when either signal arrives.
pub fn install_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        wait_for_signal().await;
        token_clone.cancel();
        debug!("shutdown signal handler completed");
    });

    token
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            warn!(error = %e, "failed to install SIGTERM handler, listening for Ctrl+C only");
            wait_for_ctrl_c().await;
            return;
        }
    };

    wait_for_first(tokio::signal::ctrl_c(), sigterm.recv()).await;
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// A failed Ctrl+C listener is not a shutdown request; the wait continues on
/// SIGTERM alone.
#[cfg(unix)]
async fn wait_for_first<C, T>(ctrl_c: C, sigterm: T)
where
    C: Future<Output = std::io::Result<()>>,
    T: Future<Output = Option<()>>,
{
    tokio::pin!(sigterm);

    tokio::select! {
        result = ctrl_c => match result {
            Ok(()) => info!("received SIGINT (Ctrl+C), initiating shutdown"),
            Err(e) => {
                warn!(error = %e, "Ctrl+C listener failed, listening for SIGTERM only");
                (&mut sigterm).await;
                info!("received SIGTERM, initiating shutdown");
            }
        },
        _ = &mut sigterm => {
            info!("received SIGTERM, initiating shutdown");
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C, initiating shutdown"),
        Err(e) => {
            // Without a signal source the server runs until killed.
            warn!(error = %e, "Ctrl+C listener failed");
            std::future::pending::<()>().await;
        }
    }
}
