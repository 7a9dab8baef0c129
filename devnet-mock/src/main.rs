/// Devnet Mock
///
/// A lightweight development node answering the JSON-RPC methods the
/// SimpleContract page and deploy script use. Designed for local runs.

use anyhow::{Context, Result};
use devnet_mock::{run_server, DevNode};
use std::env;

#[derive(Debug)]
struct Config {
    server_host: String,
    server_port: u16,
}

impl Config {
    fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let server_host = env::var("DEVNET_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("DEVNET_PORT")
            .unwrap_or_else(|_| "8545".to_string())
            .parse()
            .context("Invalid DEVNET_PORT")?;

        Ok(Self {
            server_host,
            server_port,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting devnet mock...");

    let config = Config::from_env().context("Failed to load configuration")?;

    let node = DevNode::new();
    for account in node.accounts() {
        log::info!("Unlocked account {}", account);
    }

    run_server(node, config.server_host, config.server_port)
        .await
        .context("Server error")?;

    Ok(())
}
