use anyhow::Result;
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Signals that can trigger shutdown.
enum ShutdownSignal {
    CtrlC,
    #[cfg(unix)]
    Sigterm,
}

/// Wait for termination signals (Ctrl+C, SIGTERM).
///
/// # Errors
/// Returns an error if signal handling fails.
pub async fn wait_for_shutdown() -> Result<()> {
    let _signal = tokio::select! {
        result = wait_ctrl_c() => result?,
        result = wait_sigterm() => result?,
    };

    tracing::info!("Shutdown signal received, stopping server");
    Ok(())
}

/// Token cancelled by the first termination signal.
///
/// Must be called from within a tokio runtime.
#[must_use]
pub fn shutdown_token() -> CancellationToken {
    let cancel = CancellationToken::new();
    let cancel_for_signals = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = wait_for_shutdown().await {
            tracing::warn!(
                error = %e,
                "signal waiter failed, falling back to ctrl_c()"
            );
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!(error = %e, "ctrl_c() failed; cancelling immediately");
            }
        }
        cancel_for_signals.cancel();
    });

    cancel
}

async fn wait_ctrl_c() -> Result<ShutdownSignal> {
    signal::ctrl_c().await.map_err(|e| {
        tracing::error!(%e, "Error handling Ctrl+C signal");
        e
    })?;
    tracing::info!("Received Ctrl+C signal");
    Ok(ShutdownSignal::CtrlC)
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    let mut signal_handler =
        signal::unix::signal(signal::unix::SignalKind::terminate()).map_err(|e| {
            tracing::error!(%e, "Failed to install SIGTERM handler");
            e
        })?;
    signal_handler.recv().await;
    tracing::info!("Received SIGTERM signal");
    Ok(ShutdownSignal::Sigterm)
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    std::future::pending::<Result<ShutdownSignal>>().await
}
