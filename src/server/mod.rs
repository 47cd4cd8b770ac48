//! HTTP API: `GET /forecast/{zipcode}` and `GET /health`.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

/// Binds `addr` and serves until the process is stopped.
pub async fn run(addr: &str, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    serve(listener, state).await
}

/// Serves the API on an already bound listener.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let local_addr = listener.local_addr()?;
    info!(%local_addr, "Forecast server listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
