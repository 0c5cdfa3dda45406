//! REST server startup and configuration

use anyhow::{anyhow, Result};
use axum::serve;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routing::create_router;
use crate::server::SharedState;

/// Start the REST server
pub async fn start_server(addr: SocketAddr, state: SharedState) -> Result<()> {
  std::fs::create_dir_all(&state.audio_dir)?;

  let app = create_router(state).layer(
    ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()),
  );

  let listener = TcpListener::bind(addr).await?;
  tracing::info!("campus server listening on {addr}");

  serve(listener, app).await.map_err(|e| anyhow!("server error: {e}"))
}
