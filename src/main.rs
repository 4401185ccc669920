//! sysgraph — samples memory and CPU usage and charts it.
//!
//! Run with:  `RUST_LOG=info sysgraph`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("sysgraph v{} starting", env!("CARGO_PKG_VERSION"));

    let result = sysgraph_monitor::run();
    println!("Data collection is being stopped.");
    result.map_err(Into::into)
}
