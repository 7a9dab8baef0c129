//! Contract deployment
//!
//! Sends the artifact's creation bytecode from a wallet account and waits
//! for the receipt that carries the new contract address.

use std::time::Duration;

use alloy_primitives::{Address, B256};

use crate::artifact::ContractArtifact;
use crate::pending::{PendingTransaction, DEFAULT_POLL_INTERVAL};
use crate::provider::WalletProvider;
use crate::types::TransactionRequest;
use crate::{Result, SimpleDappError};

/// Outcome of a confirmed contract creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub tx_hash: B256,
}

#[derive(Debug, Clone)]
pub struct DeployOptions {
    pub poll_interval: Duration,
    /// Bound on receipt polls; `None` waits indefinitely
    pub max_attempts: Option<u32>,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
        }
    }
}

/// Account the deployment is sent from: the configured one, or the wallet's first
pub async fn resolve_deployer<P: WalletProvider>(
    provider: &P,
    configured: Option<Address>,
) -> Result<Address> {
    if let Some(address) = configured {
        return Ok(address);
    }

    provider
        .accounts()
        .await?
        .first()
        .copied()
        .ok_or(SimpleDappError::NoAccount)
}

pub async fn deploy_contract<P: WalletProvider>(
    provider: &P,
    artifact: &ContractArtifact,
    from: Address,
    options: &DeployOptions,
) -> Result<Deployment> {
    if !artifact.has_bytecode() {
        return Err(SimpleDappError::InvalidArtifact(format!(
            "{} has no creation bytecode",
            artifact.contract_name
        )));
    }

    let tx = TransactionRequest::create(from, artifact.bytecode.clone());
    let tx_hash = provider.send_transaction(&tx).await?;
    log::info!(
        "Deploying {} from {} in transaction {}",
        artifact.contract_name,
        from,
        tx_hash
    );

    let mut pending = PendingTransaction::new(provider.clone(), tx_hash)
        .with_poll_interval(options.poll_interval);
    if let Some(max_attempts) = options.max_attempts {
        pending = pending.with_max_attempts(max_attempts);
    }

    let receipt = pending.wait().await?;
    let address = receipt
        .contract_address
        .ok_or_else(|| SimpleDappError::DeploymentFailed {
            tx_hash: tx_hash.to_string(),
            reason: "receipt has no contract address".to_string(),
        })?;

    Ok(Deployment { address, tx_hash })
}
