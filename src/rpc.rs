//! HTTP JSON-RPC wallet provider
//!
//! Talks to a node (or a wallet bridge) that holds unlocked accounts and
//! signs `eth_sendTransaction` on their behalf.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use alloy_primitives::Address;
use serde_json::{json, Value};

use crate::provider::WalletProvider;
use crate::types::{JsonRpcRequest, JsonRpcResponse};
use crate::{Result, SimpleDappError};

#[derive(Clone, Debug)]
pub struct JsonRpcProvider {
    url: String,
    /// reqwest::Client is internally Arc-based
    http_client: reqwest::Client,
    next_id: Arc<AtomicU64>,
}

impl JsonRpcProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http_client: reqwest::Client::new(),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl WalletProvider for JsonRpcProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = JsonRpcRequest::new(id, method, params);

        log::debug!("→ {} (id={})", method, id);

        let response = self
            .http_client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SimpleDappError::connection_failed(format!("{}: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(SimpleDappError::connection_failed(format!(
                "{} answered HTTP {}",
                self.url,
                response.status()
            )));
        }

        let envelope: JsonRpcResponse = response.json().await.map_err(|e| {
            SimpleDappError::invalid_response(format!("{} envelope: {}", method, e))
        })?;

        if let Some(error) = envelope.error {
            log::debug!("← {} error {}: {}", method, error.code, error.message);
            return Err(SimpleDappError::from_rpc(error.code, error.message));
        }

        Ok(envelope.result.unwrap_or(Value::Null))
    }

    /// Development nodes have no permission prompt and may not know
    /// `eth_requestAccounts`; their unlocked accounts count as connected.
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        match self.request("eth_requestAccounts", json!([])).await {
            Ok(value) => serde_json::from_value(value).map_err(|e| {
                SimpleDappError::invalid_response(format!(
                    "eth_requestAccounts returned unexpected data: {}",
                    e
                ))
            }),
            Err(e) if e.is_method_not_found() => {
                log::debug!("eth_requestAccounts unsupported by {}, using eth_accounts", self.url);
                self.accounts().await
            }
            Err(e) => Err(e),
        }
    }
}
