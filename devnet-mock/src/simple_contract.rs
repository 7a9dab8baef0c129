/// SimpleContract as hosted by the mock node
///
/// Only the behaviour the front-end observes: three fields, three setters,
/// and `changeOwner` restricted to the current owner.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{sol, SolCall, SolInterface};

sol! {
    interface ISimpleContract {
        function getDetails() external view returns (uint256, string memory, address);
        function setData(uint256 newData) external;
        function setName(string memory newName) external;
        function changeOwner(address newOwner) external;
    }
}

use ISimpleContract::{getDetailsCall, ISimpleContractCalls};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractState {
    pub data: U256,
    pub name: String,
    pub owner: Address,
}

impl ContractState {
    /// Constructor: the deployer owns the contract
    pub fn new(deployer: Address) -> Self {
        Self {
            data: U256::ZERO,
            name: String::new(),
            owner: deployer,
        }
    }

    /// Apply a transaction; `false` means the transaction reverted
    pub fn execute(&mut self, caller: Address, input: &[u8]) -> bool {
        let call = match ISimpleContractCalls::abi_decode(input, true) {
            Ok(call) => call,
            Err(e) => {
                log::debug!("Revert: undecodable call data ({})", e);
                return false;
            }
        };

        match call {
            ISimpleContractCalls::getDetails(_) => true,
            ISimpleContractCalls::setData(call) => {
                self.data = call.newData;
                true
            }
            ISimpleContractCalls::setName(call) => {
                self.name = call.newName;
                true
            }
            ISimpleContractCalls::changeOwner(call) => {
                if caller != self.owner {
                    log::debug!("Revert: {} is not the owner", caller);
                    return false;
                }
                self.owner = call.newOwner;
                true
            }
        }
    }

    /// Answer an `eth_call`; only `getDetails()` returns data
    pub fn call(&self, input: &[u8]) -> Bytes {
        match ISimpleContractCalls::abi_decode(input, true) {
            Ok(ISimpleContractCalls::getDetails(_)) => getDetailsCall::abi_encode_returns(&(
                self.data,
                self.name.clone(),
                self.owner,
            ))
            .into(),
            _ => Bytes::new(),
        }
    }
}
