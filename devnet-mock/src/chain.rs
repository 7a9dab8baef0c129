/// In-memory development chain
///
/// Instant mining: every accepted transaction gets its own block and a
/// receipt straight away (optionally hidden for a few polls). Accounts are
/// unlocked, so `eth_sendTransaction` needs no signature.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use alloy_primitives::{address, keccak256, Address, Bytes, B256, U64};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::RpcError;
use crate::simple_contract::ContractState;

/// Hardhat/Anvil chain id
pub const CHAIN_ID: u64 = 31337;

/// First three well-known development accounts
pub const DEV_ACCOUNTS: [Address; 3] = [
    address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
    address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
    address!("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"),
];

#[derive(Debug, Deserialize)]
struct SendTransactionParams {
    from: Address,
    #[serde(default)]
    to: Option<Address>,
    #[serde(default)]
    data: Option<Bytes>,
    #[serde(default)]
    input: Option<Bytes>,
}

impl SendTransactionParams {
    fn payload(&self) -> &[u8] {
        self.input
            .as_ref()
            .or(self.data.as_ref())
            .map(|b| b.as_ref())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone)]
struct StoredReceipt {
    tx_hash: B256,
    block_number: u64,
    success: bool,
    contract_address: Option<Address>,
    /// Polls left before the receipt becomes visible
    hidden_polls: u32,
}

#[derive(Debug)]
struct DevChain {
    accounts: Vec<Address>,
    nonces: HashMap<Address, u64>,
    contracts: HashMap<Address, ContractState>,
    receipts: HashMap<B256, StoredReceipt>,
    block_number: u64,
    reject_permission: bool,
    confirmation_polls: u32,
    disabled_methods: HashSet<String>,
    method_calls: HashMap<String, u64>,
}

/// Shared handle to the chain; cheap to clone
#[derive(Debug, Clone)]
pub struct DevNode {
    chain: Arc<Mutex<DevChain>>,
}

impl Default for DevNode {
    fn default() -> Self {
        Self::new()
    }
}

impl DevNode {
    pub fn new() -> Self {
        Self::with_accounts(DEV_ACCOUNTS.to_vec())
    }

    pub fn with_accounts(accounts: Vec<Address>) -> Self {
        Self {
            chain: Arc::new(Mutex::new(DevChain {
                accounts,
                nonces: HashMap::new(),
                contracts: HashMap::new(),
                receipts: HashMap::new(),
                block_number: 0,
                reject_permission: false,
                confirmation_polls: 0,
                disabled_methods: HashSet::new(),
                method_calls: HashMap::new(),
            })),
        }
    }

    fn chain(&self) -> MutexGuard<'_, DevChain> {
        self.chain.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Answer `eth_requestAccounts` with 4001, as a wallet does when the user declines
    pub fn set_reject_permission(&self, reject: bool) {
        self.chain().reject_permission = reject;
    }

    /// Number of `eth_getTransactionReceipt` polls that see `null` before a receipt
    pub fn set_confirmation_polls(&self, polls: u32) {
        self.chain().confirmation_polls = polls;
    }

    /// Answer `method` with -32601, as nodes without a wallet layer do
    pub fn disable_method(&self, method: &str) {
        self.chain().disabled_methods.insert(method.to_string());
    }

    /// How many times `method` has been requested
    pub fn call_count(&self, method: &str) -> u64 {
        self.chain().method_calls.get(method).copied().unwrap_or(0)
    }

    pub fn accounts(&self) -> Vec<Address> {
        self.chain().accounts.clone()
    }

    pub fn contract_state(&self, address: Address) -> Option<ContractState> {
        self.chain().contracts.get(&address).cloned()
    }

    /// Host a SimpleContract at `address` without a creation transaction
    pub fn install_contract(&self, address: Address, owner: Address) {
        self.chain()
            .contracts
            .insert(address, ContractState::new(owner));
    }

    /// Dispatch one JSON-RPC method
    pub fn handle(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let mut chain = self.chain();
        *chain.method_calls.entry(method.to_string()).or_insert(0) += 1;
        log::debug!("{} {}", method, params);

        if chain.disabled_methods.contains(method) {
            return Err(RpcError::MethodNotFound(method.to_string()));
        }

        match method {
            "eth_chainId" => Ok(json!(U64::from(CHAIN_ID))),
            "eth_blockNumber" => Ok(json!(U64::from(chain.block_number))),
            "eth_accounts" => Ok(json!(chain.accounts)),
            "eth_requestAccounts" => {
                if chain.reject_permission {
                    Err(RpcError::UserRejected)
                } else {
                    Ok(json!(chain.accounts))
                }
            }
            "eth_sendTransaction" => {
                let tx: SendTransactionParams = first_param(params)?;
                chain.send_transaction(tx).map(|hash| json!(hash))
            }
            "eth_getTransactionReceipt" => {
                let tx_hash: B256 = first_param(params)?;
                Ok(chain.receipt(tx_hash))
            }
            "eth_call" => {
                let tx: SendTransactionParams = first_param(params)?;
                let output = tx
                    .to
                    .and_then(|to| chain.contracts.get(&to))
                    .map(|contract| contract.call(tx.payload()))
                    .unwrap_or_default();
                Ok(json!(output))
            }
            other => Err(RpcError::MethodNotFound(other.to_string())),
        }
    }
}

impl DevChain {
    fn send_transaction(&mut self, tx: SendTransactionParams) -> Result<B256, RpcError> {
        if !self.accounts.contains(&tx.from) {
            return Err(RpcError::UnknownAccount(tx.from));
        }

        let nonce = self.nonces.entry(tx.from).or_insert(0);
        let tx_nonce = *nonce;
        *nonce += 1;

        let mut preimage = tx.from.to_vec();
        preimage.extend_from_slice(&tx_nonce.to_be_bytes());
        let tx_hash = keccak256(&preimage);

        self.block_number += 1;

        let (success, contract_address) = match tx.to {
            None => {
                let created = tx.from.create(tx_nonce);
                self.contracts.insert(created, ContractState::new(tx.from));
                log::info!("Contract created at {} by {}", created, tx.from);
                (true, Some(created))
            }
            Some(to) => match self.contracts.get_mut(&to) {
                Some(contract) => (contract.execute(tx.from, tx.payload()), None),
                None => (true, None),
            },
        };

        log::info!(
            "Block {}: tx {} from {} ({})",
            self.block_number,
            tx_hash,
            tx.from,
            if success { "success" } else { "reverted" }
        );

        self.receipts.insert(
            tx_hash,
            StoredReceipt {
                tx_hash,
                block_number: self.block_number,
                success,
                contract_address,
                hidden_polls: self.confirmation_polls,
            },
        );

        Ok(tx_hash)
    }

    fn receipt(&mut self, tx_hash: B256) -> Value {
        let Some(receipt) = self.receipts.get_mut(&tx_hash) else {
            return Value::Null;
        };

        if receipt.hidden_polls > 0 {
            receipt.hidden_polls -= 1;
            return Value::Null;
        }

        json!({
            "transactionHash": receipt.tx_hash,
            "blockNumber": U64::from(receipt.block_number),
            "status": U64::from(u64::from(receipt.success)),
            "contractAddress": receipt.contract_address,
        })
    }
}

fn first_param<T: serde::de::DeserializeOwned>(params: Value) -> Result<T, RpcError> {
    let first = match params {
        Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
        other => other,
    };
    serde_json::from_value(first).map_err(|e| RpcError::InvalidParams(e.to_string()))
}
