//! JSON-RPC over HTTP against a spawned devnet mock

use devnet_mock::{spawn, DevNode, DEV_ACCOUNTS};
use serde_json::{json, Value};

async fn rpc(url: &str, method: &str, params: Value) -> Value {
    reqwest::Client::new()
        .post(url)
        .json(&json!({ "jsonrpc": "2.0", "id": 7, "method": method, "params": params }))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid JSON")
}

#[tokio::test]
async fn test_envelope_carries_id_and_result() {
    let addr = spawn(DevNode::new()).await.unwrap();
    let url = format!("http://{}", addr);

    let response = rpc(&url, "eth_chainId", json!([])).await;
    assert_eq!(response["jsonrpc"], "2.0");
    assert_eq!(response["id"], 7);
    assert_eq!(response["result"], "0x7a69");

    let response = rpc(&url, "eth_accounts", json!([])).await;
    assert_eq!(response["result"], json!(DEV_ACCOUNTS));
}

#[tokio::test]
async fn test_errors_travel_in_envelope() {
    let node = DevNode::new();
    node.set_reject_permission(true);
    let addr = spawn(node).await.unwrap();
    let url = format!("http://{}", addr);

    let response = rpc(&url, "eth_requestAccounts", json!([])).await;
    assert_eq!(response["error"]["code"], 4001);
    assert!(response.get("result").is_none());

    let response = rpc(&url, "debug_traceTransaction", json!([])).await;
    assert_eq!(response["error"]["code"], -32601);
}

#[tokio::test]
async fn test_health() {
    let addr = spawn(DevNode::new()).await.unwrap();
    let body = reqwest::get(format!("http://{}/health", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "OK");
}
