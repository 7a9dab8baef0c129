use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use super::{handlers, AppState};
use crate::config::ServerConfig;
use crate::error::ServerError;
use simple_dapp::{ContractArtifact, JsonRpcProvider, Session};

/// Build the session the page starts with and run the mount-time account check
pub async fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let artifact = ContractArtifact::from_path(&config.artifact_path)?;
    let wallet = config.wallet_rpc_url.as_deref().map(JsonRpcProvider::new);

    let mut session = Session::new(wallet, config.contract_address, Arc::new(artifact))
        .with_poll_interval(config.poll_interval);
    session.get_wallet().await;

    Ok(AppState::new(session))
}

pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    // Set ALLOWED_ORIGINS="https://your-app.example" for production
    // If not set, allows any origin (development mode)
    let cors = if allowed_origins.is_empty() {
        log::warn!("CORS: Allowing all origins (development mode). Set ALLOWED_ORIGINS env var for production.");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        log::info!("CORS configured for origins: {}", allowed_origins.join(","));
        let origin_list: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    log::warn!("Ignoring invalid CORS origin {:?}", origin);
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(origin_list)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        // Page and its form actions
        .route("/", get(handlers::index_handler))
        .route("/connect", post(handlers::connect_handler))
        .route("/set-data", post(handlers::set_data_handler))
        .route("/set-name", post(handlers::set_name_handler))
        .route("/change-owner", post(handlers::change_owner_handler))
        // JSON view
        .route("/api/session", get(handlers::session_handler))
        .route("/api/details", get(handlers::details_handler))
        .route("/health", get(handlers::health_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let state = build_state(&config).await?;
    let app = create_router(state, &config.allowed_origins);

    let listener = bind_listener(&config.bind_address).await?;
    log::info!("Server listening on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Bind the page's listener; an unusable address surfaces as `ServerError::Io`
pub async fn bind_listener(bind_address: &str) -> Result<tokio::net::TcpListener, ServerError> {
    Ok(tokio::net::TcpListener::bind(bind_address).await?)
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            log::info!("Received SIGTERM signal");
        },
    }

    log::info!("Shutdown signal received, exiting gracefully...");
}
