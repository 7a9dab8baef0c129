//! Error types for simple-dapp operations
//!
//! Covers the wallet provider round-trips, artifact loading, and the
//! transaction lifecycle of the SimpleContract calls.

use std::error::Error as StdError;
use std::fmt;

/// JSON-RPC error code a wallet returns when the user declines a request (EIP-1193)
pub const USER_REJECTED_CODE: i64 = 4001;

/// JSON-RPC error code for an unsupported method
pub const METHOD_NOT_FOUND_CODE: i64 = -32601;

/// Core error type for simple-dapp operations
#[derive(Clone, Debug)]
pub enum SimpleDappError {
    /// Failed to reach the wallet provider
    ConnectionFailed(String),

    /// Provider answered with a JSON-RPC error object
    Rpc { code: i64, message: String },

    /// User declined the permission prompt or the transaction
    UserRejected(String),

    /// Provider answered with something that is not a valid response
    InvalidResponse(String),

    /// Contract artifact could not be read or lacks part of the contract surface
    InvalidArtifact(String),

    /// Call data or return data could not be encoded/decoded
    Abi(String),

    /// Transaction was mined but reverted
    Reverted { tx_hash: String },

    /// Receipt did not show up within the configured number of polls
    ReceiptTimeout { tx_hash: String, attempts: u32 },

    /// Contract creation did not produce an address
    DeploymentFailed { tx_hash: String, reason: String },

    /// Wallet exposed no accounts
    NoAccount,
}

impl fmt::Display for SimpleDappError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed(msg) => {
                write!(f, "Failed to connect to wallet provider: {}", msg)
            }
            Self::Rpc { code, message } => {
                write!(f, "RPC error {}: {}", code, message)
            }
            Self::UserRejected(msg) => {
                write!(f, "User rejected the request: {}", msg)
            }
            Self::InvalidResponse(msg) => {
                write!(f, "Invalid response from wallet provider: {}", msg)
            }
            Self::InvalidArtifact(msg) => {
                write!(f, "Invalid contract artifact: {}", msg)
            }
            Self::Abi(msg) => {
                write!(f, "ABI error: {}", msg)
            }
            Self::Reverted { tx_hash } => {
                write!(f, "Transaction reverted: tx_hash={}", tx_hash)
            }
            Self::ReceiptTimeout { tx_hash, attempts } => {
                write!(
                    f,
                    "No receipt for {} after {} attempts",
                    tx_hash, attempts
                )
            }
            Self::DeploymentFailed { tx_hash, reason } => {
                write!(
                    f,
                    "Deployment failed: tx_hash={}, reason={}",
                    tx_hash, reason
                )
            }
            Self::NoAccount => write!(f, "No account found"),
        }
    }
}

impl StdError for SimpleDappError {}

impl From<alloy_sol_types::Error> for SimpleDappError {
    fn from(err: alloy_sol_types::Error) -> Self {
        Self::Abi(err.to_string())
    }
}

// Helper functions for common error scenarios
impl SimpleDappError {
    /// Create a connection failed error
    pub fn connection_failed(msg: impl Into<String>) -> Self {
        Self::ConnectionFailed(msg.into())
    }

    /// Create an invalid response error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Map a JSON-RPC error object onto the error variants
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        if code == USER_REJECTED_CODE {
            Self::UserRejected(message)
        } else {
            Self::Rpc { code, message }
        }
    }

    /// Whether the provider reported the method as unsupported
    pub fn is_method_not_found(&self) -> bool {
        matches!(self, Self::Rpc { code, .. } if *code == METHOD_NOT_FOUND_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_code_maps_to_user_rejected() {
        let err = SimpleDappError::from_rpc(4001, "User denied account authorization");
        assert!(matches!(err, SimpleDappError::UserRejected(_)));
    }

    #[test]
    fn test_method_not_found() {
        let err = SimpleDappError::from_rpc(-32601, "Method eth_requestAccounts not found");
        assert!(err.is_method_not_found());
        assert!(!SimpleDappError::NoAccount.is_method_not_found());
    }
}
