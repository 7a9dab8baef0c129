//! Wire types exchanged with the wallet provider
//!
//! JSON-RPC 2.0 envelopes plus the transaction request and receipt shapes
//! used by `eth_sendTransaction` and `eth_getTransactionReceipt`.

use alloy_primitives::{Address, Bytes, B256, U64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Transaction as handed to the wallet for signing
///
/// Gas, fees and nonce are left to the wallet, the same way an injected
/// provider fills them in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionRequest {
    pub from: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    #[serde(default)]
    pub data: Bytes,
}

impl TransactionRequest {
    /// Call into an existing contract
    pub fn call(from: Address, to: Address, data: impl Into<Bytes>) -> Self {
        Self {
            from,
            to: Some(to),
            data: data.into(),
        }
    }

    /// Contract creation (no recipient)
    pub fn create(from: Address, init_code: impl Into<Bytes>) -> Self {
        Self {
            from,
            to: None,
            data: init_code.into(),
        }
    }
}

/// Confirmation record of a mined transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    #[serde(default)]
    pub block_number: Option<U64>,
    /// 1 for success, 0 for revert (absent on pre-Byzantium chains)
    #[serde(default)]
    pub status: Option<U64>,
    #[serde(default)]
    pub contract_address: Option<Address>,
}

impl TransactionReceipt {
    pub fn succeeded(&self) -> bool {
        self.status.map_or(true, |status| status == U64::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_receipt_from_node_json() {
        let receipt: TransactionReceipt = serde_json::from_value(json!({
            "transactionHash": "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b",
            "blockNumber": "0x1",
            "status": "0x0",
            "contractAddress": null,
            "gasUsed": "0x5208"
        }))
        .unwrap();

        assert!(!receipt.succeeded());
        assert_eq!(receipt.block_number, Some(U64::from(1)));
        assert!(receipt.contract_address.is_none());
    }

    #[test]
    fn test_create_request_omits_recipient() {
        let tx = TransactionRequest::create(Address::ZERO, vec![0x60, 0x80]);
        let value = serde_json::to_value(&tx).unwrap();
        assert!(value.get("to").is_none());
        assert_eq!(value["data"], "0x6080");
    }
}
