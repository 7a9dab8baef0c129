//! Compiled contract artifact (Hardhat layout)
//!
//! The artifact supplies the ABI the contract handle is checked against and
//! the creation bytecode the deploy script sends.

use std::path::Path;

use alloy_json_abi::JsonAbi;
use alloy_primitives::{Bytes, Selector};
use serde::Deserialize;

use crate::{Result, SimpleDappError};

/// Where `npx hardhat compile` writes the SimpleContract artifact
pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/contracts/SimpleContract.sol/SimpleContract.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    #[serde(default)]
    pub contract_name: String,
    pub abi: JsonAbi,
    /// Creation bytecode, empty for interfaces and abstract contracts
    #[serde(default)]
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SimpleDappError::InvalidArtifact(format!("cannot read {}: {}", path.display(), e))
        })?;
        let artifact = Self::from_json_str(&json)?;
        log::debug!(
            "Loaded artifact {} from {} ({} functions)",
            artifact.contract_name,
            path.display(),
            artifact.abi.functions().count()
        );
        Ok(artifact)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SimpleDappError::InvalidArtifact(e.to_string()))
    }

    /// Check that the ABI declares `name` with the expected selector
    pub fn require_function(&self, name: &str, selector: Selector) -> Result<()> {
        let declared = self
            .abi
            .function(name)
            .map(|overloads| overloads.iter().any(|f| f.selector() == selector))
            .unwrap_or(false);

        if declared {
            Ok(())
        } else {
            Err(SimpleDappError::InvalidArtifact(format!(
                "{} does not declare {} ({})",
                self.display_name(),
                name,
                selector
            )))
        }
    }

    pub fn has_bytecode(&self) -> bool {
        !self.bytecode.is_empty()
    }

    fn display_name(&self) -> &str {
        if self.contract_name.is_empty() {
            "artifact"
        } else {
            &self.contract_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::FixedBytes;

    const ARTIFACT: &str = r#"{
        "contractName": "Counter",
        "abi": [
            {
                "type": "function",
                "name": "setData",
                "inputs": [{ "name": "newData", "type": "uint256", "internalType": "uint256" }],
                "outputs": [],
                "stateMutability": "nonpayable"
            }
        ],
        "bytecode": "0x"
    }"#;

    #[test]
    fn test_require_function_checks_selector() {
        let artifact = ContractArtifact::from_json_str(ARTIFACT).unwrap();
        // keccak256("setData(uint256)")[..4]
        let set_data = FixedBytes::from([0x5b, 0x4b, 0x73, 0xa9]);

        assert!(artifact.require_function("setData", set_data).is_ok());
        assert!(artifact
            .require_function("setData", FixedBytes::from([0, 0, 0, 0]))
            .is_err());
        assert!(artifact.require_function("setName", set_data).is_err());
        assert!(!artifact.has_bytecode());
    }

    #[test]
    fn test_missing_abi_is_rejected() {
        let err = ContractArtifact::from_json_str(r#"{ "contractName": "X" }"#).unwrap_err();
        assert!(matches!(err, SimpleDappError::InvalidArtifact(_)));
    }
}
