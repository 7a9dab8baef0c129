//! Shared test utilities
//!
//! - In-process wallet backed by a devnet mock (no HTTP)
//! - Fixture artifact loading
//! - Logger setup

#![allow(dead_code)]

use std::sync::Arc;

use devnet_mock::DevNode;
use serde_json::Value;
use simple_dapp::{ContractArtifact, SimpleDappError, WalletProvider};

pub const ARTIFACT_JSON: &str = include_str!("../fixtures/SimpleContract.json");

/// Initialize logging once for the test binary
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

pub fn artifact() -> Arc<ContractArtifact> {
    Arc::new(ContractArtifact::from_json_str(ARTIFACT_JSON).expect("fixture artifact"))
}

/// Wallet that answers requests straight from a devnet mock
#[derive(Clone)]
pub struct DevNodeWallet {
    pub node: DevNode,
}

impl DevNodeWallet {
    pub fn new(node: DevNode) -> Self {
        Self { node }
    }
}

impl WalletProvider for DevNodeWallet {
    async fn request(&self, method: &str, params: Value) -> simple_dapp::Result<Value> {
        self.node
            .handle(method, params)
            .map_err(|e| SimpleDappError::from_rpc(e.code(), e.to_string()))
    }
}
