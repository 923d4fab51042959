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
    let signal = tokio::select! {
        result = wait_ctrl_c() => result?,
        result = wait_sigterm() => result?,
    };

    let name = match signal {
        ShutdownSignal::CtrlC => "ctrl_c",
        #[cfg(unix)]
        ShutdownSignal::Sigterm => "sigterm",
    };
    tracing::info!(signal = name, "Shutdown signal received, initiating graceful shutdown");
    Ok(())
}

/// Spawn a signal waiter and return a token it cancels on shutdown.
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
                "shutdown: primary waiter failed, falling back to ctrl_c()"
            );
            let _ = signal::ctrl_c().await;
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
    Ok(ShutdownSignal::Sigterm)
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    std::future::pending::<Result<ShutdownSignal>>().await
}
