use std::future::Future;

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

    tracing::info!("Shutdown signal received, initiating graceful shutdown");
    Ok(())
}

/// Root shutdown token cancelled on Ctrl+C or SIGTERM.
///
/// Must be called from within a tokio runtime.
#[must_use]
pub fn shutdown_token() -> CancellationToken {
    shutdown_token_on(async {
        if let Err(e) = wait_for_shutdown().await {
            tracing::warn!(
                error = %e,
                "shutdown: primary waiter failed; falling back to ctrl_c()"
            );
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!(error = %e, "shutdown: ctrl_c() fallback failed");
            }
        }
    })
}

/// Shutdown token cancelled when `waiter` completes.
///
/// Must be called from within a tokio runtime.
#[must_use]
pub fn shutdown_token_on<F>(waiter: F) -> CancellationToken
where
    F: Future<Output = ()> + Send + 'static,
{
    let cancel = CancellationToken::new();
    let c = cancel.clone();
    tokio::spawn(async move {
        waiter.await;
        tracing::info!("shutdown: waiter completed");
        c.cancel();
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

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn token_is_cancelled_when_waiter_completes() {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let token = shutdown_token_on(async move {
            let _ = rx.await;
        });

        assert!(!token.is_cancelled());
        tx.send(()).unwrap();

        tokio::time::timeout(Duration::from_secs(5), token.cancelled())
            .await
            .unwrap();
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn child_tokens_follow_the_root() {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let root = shutdown_token_on(async move {
            let _ = rx.await;
        });
        let child = root.child_token();

        tx.send(()).unwrap();

        tokio::time::timeout(Duration::from_secs(5), child.cancelled())
            .await
            .unwrap();
    }
}
