//! Wallet provider seam
//!
//! A wallet provider is anything that answers EIP-1193 style
//! `request({ method, params })` calls: an injected browser wallet, a
//! development node with unlocked accounts, or a test double. Everything
//! else in the crate talks to the chain through this trait.

use std::future::Future;

use alloy_primitives::{Address, Bytes, B256};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::types::{TransactionReceipt, TransactionRequest};
use crate::{Result, SimpleDappError};

pub trait WalletProvider: Clone + Send + Sync {
    /// Raw JSON-RPC round-trip
    fn request(&self, method: &str, params: Value) -> impl Future<Output = Result<Value>> + Send;

    /// Accounts already exposed to this page (`eth_accounts`), no prompt
    fn accounts(&self) -> impl Future<Output = Result<Vec<Address>>> + Send {
        async move {
            let value = self.request("eth_accounts", json!([])).await?;
            decode("eth_accounts", value)
        }
    }

    /// Ask the user to expose accounts (`eth_requestAccounts`)
    ///
    /// A declined prompt comes back as [`SimpleDappError::UserRejected`].
    fn request_accounts(&self) -> impl Future<Output = Result<Vec<Address>>> + Send {
        async move {
            let value = self.request("eth_requestAccounts", json!([])).await?;
            decode("eth_requestAccounts", value)
        }
    }

    /// Hand a transaction to the wallet for signing and broadcast
    fn send_transaction(
        &self,
        tx: &TransactionRequest,
    ) -> impl Future<Output = Result<B256>> + Send {
        let params = json!([tx]);
        async move {
            let value = self.request("eth_sendTransaction", params).await?;
            decode("eth_sendTransaction", value)
        }
    }

    /// Read-only call against the latest block
    fn call(&self, tx: &TransactionRequest) -> impl Future<Output = Result<Bytes>> + Send {
        let params = json!([tx, "latest"]);
        async move {
            let value = self.request("eth_call", params).await?;
            decode("eth_call", value)
        }
    }

    /// Receipt of a transaction, `None` while it is still pending
    fn transaction_receipt(
        &self,
        tx_hash: B256,
    ) -> impl Future<Output = Result<Option<TransactionReceipt>>> + Send {
        async move {
            let value = self
                .request("eth_getTransactionReceipt", json!([tx_hash]))
                .await?;
            decode("eth_getTransactionReceipt", value)
        }
    }
}

fn decode<T: DeserializeOwned>(method: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        SimpleDappError::invalid_response(format!("{} returned unexpected data: {}", method, e))
    })
}
