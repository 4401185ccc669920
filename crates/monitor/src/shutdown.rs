use std::future::Future;
use sysgraph_core::Result;

/// Resolve once the process is asked to stop.
///
/// Handlers are installed before this returns, so a signal that arrives while
/// a cycle is running is not lost; it is observed at the next wait. Must be
/// called from inside a Tokio runtime.
#[cfg(unix)]
pub fn signal() -> Result<impl Future<Output = ()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint  = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    Ok(async move {
        tokio::select! {
            _ = sigint.recv()  => tracing::info!("Received SIGINT"),
            _ = sigterm.recv() => tracing::info!("Received SIGTERM"),
        }
    })
}

#[cfg(not(unix))]
pub fn signal() -> Result<impl Future<Output = ()>> {
    Ok(async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl-C"),
            Err(e) => {
                tracing::error!("Cannot listen for Ctrl-C: {e}");
                std::future::pending::<()>().await;
            }
        }
    })
}
