use alloy_primitives::Address;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors the node reports as JSON-RPC error objects
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("the method {0} does not exist/is not available")]
    MethodNotFound(String),

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("User rejected the request.")]
    UserRejected,

    #[error("unknown account {0}")]
    UnknownAccount(Address),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl RpcError {
    pub fn code(&self) -> i64 {
        match self {
            RpcError::MethodNotFound(_) => -32601,
            RpcError::InvalidParams(_) => -32602,
            RpcError::UserRejected => 4001,
            RpcError::UnknownAccount(_) => -32000,
            RpcError::InvalidRequest(_) => -32600,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "code": self.code(),
            "message": self.to_string(),
        })
    }
}
