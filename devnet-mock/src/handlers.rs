/// Axum handler for the JSON-RPC endpoint

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::chain::DevNode;
use crate::error::RpcError;

/// Shared application state
pub type AppState = DevNode;

#[derive(Debug, Deserialize)]
struct RpcRequest {
    #[serde(default)]
    id: Value,
    method: String,
    #[serde(default)]
    params: Value,
}

/// POST /
/// Single JSON-RPC 2.0 request; errors travel in the envelope with HTTP 200
pub async fn json_rpc(State(node): State<AppState>, Json(body): Json<Value>) -> Json<Value> {
    let request: RpcRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => {
            let error = RpcError::InvalidRequest(e.to_string());
            return Json(json!({ "jsonrpc": "2.0", "id": Value::Null, "error": error.to_json() }));
        }
    };

    let response = match node.handle(&request.method, request.params) {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": request.id, "result": result }),
        Err(error) => {
            log::debug!("{} failed: {}", request.method, error);
            json!({ "jsonrpc": "2.0", "id": request.id, "error": error.to_json() })
        }
    };

    Json(response)
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
