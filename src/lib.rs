//! simple-dapp: wallet-connected front-end for the SimpleContract
//!
//! This crate holds everything the page and the deploy script need to talk
//! to one deployed contract through a wallet provider.
//!
//! # Architecture
//!
//! - **Wallet provider**: EIP-1193 style `request` seam ([`WalletProvider`]),
//!   with an HTTP JSON-RPC implementation ([`JsonRpcProvider`])
//! - **Contract handle**: signer-bound calls to `getDetails`, `setData`,
//!   `setName` and `changeOwner` ([`SimpleContract`])
//! - **Session**: page-local state and event handlers ([`Session`]), rendered
//!   to HTML by [`render_page`]
//! - **Deployment**: one-shot contract creation ([`deploy_contract`])
//!
//! # Example
//!
//! ```ignore
//! use simple_dapp::{ContractArtifact, JsonRpcProvider, Session, DEFAULT_CONTRACT_ADDRESS, U256};
//!
//! let artifact = ContractArtifact::from_path(simple_dapp::DEFAULT_ARTIFACT_PATH)?;
//! let wallet = JsonRpcProvider::new("http://127.0.0.1:8545");
//! let mut session = Session::new(Some(wallet), DEFAULT_CONTRACT_ADDRESS, artifact.into());
//!
//! session.connect_account().await;
//! session.get_details().await;
//! session.set_data(U256::from(42)).await;
//! ```

// Public modules
pub mod artifact;
pub mod contract;
pub mod deploy;
pub mod error;
pub mod page;
pub mod pending;
pub mod provider;
pub mod rpc;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use artifact::{ContractArtifact, DEFAULT_ARTIFACT_PATH};
pub use contract::{ContractDetails, ISimpleContract, SimpleContract, DEFAULT_CONTRACT_ADDRESS};
pub use deploy::{deploy_contract, resolve_deployer, DeployOptions, Deployment};
pub use error::SimpleDappError;
pub use page::{render_page, DEMO_DATA, DEMO_NAME};
pub use pending::PendingTransaction;
pub use provider::WalletProvider;
pub use rpc::JsonRpcProvider;
pub use session::{DetailsSnapshot, PageView, Session};
pub use types::{TransactionReceipt, TransactionRequest};

// Re-export the primitive types used across the API
pub use alloy_primitives::{Address, Bytes, B256, U256};

// Common result type
pub type Result<T> = std::result::Result<T, SimpleDappError>;
