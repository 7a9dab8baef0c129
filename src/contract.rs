//! Signer-bound handle to a deployed SimpleContract
//!
//! Reads go through `eth_call`; writes are handed to the wallet as
//! `eth_sendTransaction` from the connected account and come back as a
//! [`PendingTransaction`].

use std::time::Duration;

use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};
use serde::Serialize;

use crate::artifact::ContractArtifact;
use crate::pending::{PendingTransaction, DEFAULT_POLL_INTERVAL};
use crate::provider::WalletProvider;
use crate::types::TransactionRequest;
use crate::Result;

sol! {
    /// Functions of the SimpleContract this front-end calls
    interface ISimpleContract {
        function getDetails() external view returns (uint256, string memory, address);
        function setData(uint256 newData) external;
        function setName(string memory newName) external;
        function changeOwner(address newOwner) external;
    }
}

use ISimpleContract::{changeOwnerCall, getDetailsCall, setDataCall, setNameCall};

/// Address Hardhat assigns to the first contract deployed on a fresh node
pub const DEFAULT_CONTRACT_ADDRESS: Address =
    alloy_primitives::address!("5FbDB2315678afecb367f032d93F642f64180aa3");

/// The three fields returned by `getDetails()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractDetails {
    pub data: U256,
    pub name: String,
    pub owner: Address,
}

#[derive(Debug, Clone)]
pub struct SimpleContract<P> {
    address: Address,
    signer: Address,
    provider: P,
    poll_interval: Duration,
}

impl<P: WalletProvider> SimpleContract<P> {
    /// Bind a handle to `address`, signing as `signer`
    ///
    /// Fails when the artifact's ABI does not declare every function the
    /// handle calls.
    pub fn new(
        address: Address,
        artifact: &ContractArtifact,
        provider: P,
        signer: Address,
    ) -> Result<Self> {
        artifact.require_function("getDetails", getDetailsCall::SELECTOR.into())?;
        artifact.require_function("setData", setDataCall::SELECTOR.into())?;
        artifact.require_function("setName", setNameCall::SELECTOR.into())?;
        artifact.require_function("changeOwner", changeOwnerCall::SELECTOR.into())?;

        Ok(Self {
            address,
            signer,
            provider,
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn signer(&self) -> Address {
        self.signer
    }

    pub async fn get_details(&self) -> Result<ContractDetails> {
        let tx = TransactionRequest::call(self.signer, self.address, getDetailsCall {}.abi_encode());
        let output = self.provider.call(&tx).await?;
        let details = getDetailsCall::abi_decode_returns(&output, true)?;

        Ok(ContractDetails {
            data: details._0,
            name: details._1,
            owner: details._2,
        })
    }

    pub async fn set_data(&self, data: U256) -> Result<PendingTransaction<P>> {
        self.send(setDataCall { newData: data }).await
    }

    pub async fn set_name(&self, name: impl Into<String>) -> Result<PendingTransaction<P>> {
        self.send(setNameCall {
            newName: name.into(),
        })
        .await
    }

    pub async fn change_owner(&self, new_owner: Address) -> Result<PendingTransaction<P>> {
        self.send(changeOwnerCall { newOwner: new_owner }).await
    }

    async fn send<C: SolCall>(&self, call: C) -> Result<PendingTransaction<P>> {
        let tx = TransactionRequest::call(self.signer, self.address, call.abi_encode());
        let tx_hash = self.provider.send_transaction(&tx).await?;
        log::info!("{} submitted as {}", C::SIGNATURE, tx_hash);

        Ok(PendingTransaction::new(self.provider.clone(), tx_hash)
            .with_poll_interval(self.poll_interval))
    }
}
