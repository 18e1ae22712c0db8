//! HTTP serving shared by the three binaries.

pub mod routes;

use anyhow::Result;
use axum::Router;

/// Binds the listener and runs the router until the process stops.
pub async fn serve(app: Router, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
