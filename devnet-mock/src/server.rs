/// Axum HTTP server setup and routing

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::chain::DevNode;
use crate::handlers::*;

pub fn create_router(node: DevNode) -> Router {
    // Browser pages call the node directly
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", post(json_rpc))
        .route("/health", get(health_check))
        .with_state(node)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(node: DevNode, host: String, port: u16) -> anyhow::Result<()> {
    let app = create_router(node);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("🚀 Devnet mock listening on http://{}", addr);
    log::info!("🔗 Chain id {}", crate::chain::CHAIN_ID);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Serve `node` on an ephemeral local port in the background
///
/// Returns the bound address; the server lives as long as the runtime.
pub async fn spawn(node: DevNode) -> anyhow::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = create_router(node);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            log::error!("Devnet mock stopped: {}", e);
        }
    });

    Ok(addr)
}
