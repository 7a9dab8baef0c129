/// Devnet Mock Library
///
/// In-memory Ethereum JSON-RPC development node hosting a SimpleContract,
/// usable as a standalone binary or embedded in tests.

pub mod chain;
pub mod error;
pub mod handlers;
pub mod server;
pub mod simple_contract;

// Re-export commonly used types
pub use chain::{DevNode, CHAIN_ID, DEV_ACCOUNTS};
pub use error::RpcError;
pub use server::{create_router, run_server, spawn};
pub use simple_contract::ContractState;
