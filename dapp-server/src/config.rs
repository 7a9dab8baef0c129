/// Server configuration from environment variables
///
/// Controls where the page is served, which wallet endpoint stands in for the
/// injected provider, and which deployed contract the page talks to.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use simple_dapp::{Address, DEFAULT_ARTIFACT_PATH, DEFAULT_CONTRACT_ADDRESS};

use crate::error::ServerError;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Wallet JSON-RPC endpoint; `None` means no wallet is injected
    pub wallet_rpc_url: Option<String>,
    /// Deployed SimpleContract
    pub contract_address: Address,
    /// Compiled artifact providing the ABI
    pub artifact_path: PathBuf,
    /// Receipt polling interval
    pub poll_interval: Duration,
    /// Allowed CORS origins; empty allows any (development mode)
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `BIND_ADDRESS`: listen address (default `127.0.0.1:3000`)
    /// - `WALLET_RPC_URL`: wallet endpoint (unset: page asks to install a wallet)
    /// - `CONTRACT_ADDRESS`: deployed contract (default: first Hardhat deployment)
    /// - `ARTIFACT_PATH`: compiled artifact (default Hardhat layout)
    /// - `RECEIPT_POLL_MS`: receipt polling interval in milliseconds (default 500)
    /// - `ALLOWED_ORIGINS`: comma-separated CORS origins
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Against a local node
    /// WALLET_RPC_URL=http://127.0.0.1:8545 cargo run -p dapp-server
    /// ```
    pub fn from_env() -> Result<Self, ServerError> {
        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        let wallet_rpc_url = env::var("WALLET_RPC_URL").ok().filter(|url| !url.is_empty());
        match wallet_rpc_url {
            Some(ref url) => log::info!("🔗 Wallet RPC URL: {}", url),
            None => log::warn!("⚠️  WALLET_RPC_URL not set, serving without a wallet"),
        }

        let contract_address = match env::var("CONTRACT_ADDRESS") {
            Ok(value) => value.trim().parse().map_err(|e| {
                ServerError::Config(format!("CONTRACT_ADDRESS {:?}: {}", value, e))
            })?,
            Err(_) => DEFAULT_CONTRACT_ADDRESS,
        };
        log::info!("📄 Contract address: {}", contract_address);

        let artifact_path = env::var("ARTIFACT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ARTIFACT_PATH));

        let poll_interval = match env::var("RECEIPT_POLL_MS") {
            Ok(value) => Duration::from_millis(value.parse().map_err(|e| {
                ServerError::Config(format!("RECEIPT_POLL_MS {:?}: {}", value, e))
            })?),
            Err(_) => Self::default().poll_interval,
        };

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|origins| parse_origins(&origins))
            .unwrap_or_default();

        Ok(Self {
            bind_address,
            wallet_rpc_url,
            contract_address,
            artifact_path,
            poll_interval,
            allowed_origins,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            wallet_rpc_url: None,
            contract_address: DEFAULT_CONTRACT_ADDRESS,
            artifact_path: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            poll_interval: Duration::from_millis(500),
            allowed_origins: Vec::new(),
        }
    }
}

fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
