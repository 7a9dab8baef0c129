//! Session handler behaviour against an in-process devnet wallet
//!
//! Run with: cargo test --test session_test -- --nocapture

mod common;

use std::time::Duration;

use common::{artifact, init_logging, DevNodeWallet};
use devnet_mock::{DevNode, DEV_ACCOUNTS};
use simple_dapp::{PageView, Session, DEFAULT_CONTRACT_ADDRESS, U256};

fn deployed_node() -> DevNode {
    let node = DevNode::new();
    node.install_contract(DEFAULT_CONTRACT_ADDRESS, DEV_ACCOUNTS[0]);
    node
}

fn session_for(node: &DevNode) -> Session<DevNodeWallet> {
    Session::new(
        Some(DevNodeWallet::new(node.clone())),
        DEFAULT_CONTRACT_ADDRESS,
        artifact(),
    )
    .with_poll_interval(Duration::from_millis(5))
}

#[tokio::test]
async fn test_no_wallet_makes_no_calls() {
    init_logging();
    let mut session: Session<DevNodeWallet> =
        Session::new(None, DEFAULT_CONTRACT_ADDRESS, artifact());

    session.get_wallet().await;
    session.get_details().await;
    session.set_data(U256::from(42)).await;
    assert_eq!(session.view(), PageView::InstallWallet);

    session.connect_account().await;
    assert_eq!(
        session.take_notice().as_deref(),
        Some("A wallet provider is required to connect")
    );
    assert!(session.take_notice().is_none());
    assert!(session.account().is_none());
}

#[tokio::test]
async fn test_wallet_without_account_issues_no_reads() {
    init_logging();
    let node = DevNode::with_accounts(Vec::new());
    let mut session = session_for(&node);

    session.get_wallet().await;
    assert_eq!(session.view(), PageView::Connect);
    assert!(!session.needs_details());

    session.get_details().await;
    assert_eq!(node.call_count("eth_call"), 0);
}

#[tokio::test]
async fn test_connect_then_single_read() {
    init_logging();
    let node = deployed_node();
    let mut session = session_for(&node);

    session.connect_account().await;
    assert_eq!(session.account(), Some(DEV_ACCOUNTS[0]));
    assert!(session.has_contract());
    assert!(session.needs_details());
    assert_eq!(node.call_count("eth_call"), 0);

    session.get_details().await;
    assert_eq!(node.call_count("eth_call"), 1);
    assert!(!session.needs_details());

    let details = session.details();
    assert_eq!(details.data, Some(U256::ZERO));
    assert_eq!(details.name, "");
    assert_eq!(details.owner, DEV_ACCOUNTS[0].to_string());
}

#[tokio::test]
async fn test_set_data_42_is_reflected_after_confirmation() {
    init_logging();
    let node = deployed_node();
    node.set_confirmation_polls(3);
    let mut session = session_for(&node);
    session.connect_account().await;

    session.set_data(U256::from(42)).await;

    assert_eq!(session.details().data, Some(U256::from(42)));
    assert_eq!(node.call_count("eth_getTransactionReceipt"), 4);
    assert_eq!(node.call_count("eth_call"), 1);
}

#[tokio::test]
async fn test_set_name() {
    init_logging();
    let node = deployed_node();
    let mut session = session_for(&node);
    session.connect_account().await;

    session.set_name("Vikash").await;
    assert_eq!(session.details().name, "Vikash");
    assert_eq!(
        node.contract_state(DEFAULT_CONTRACT_ADDRESS).unwrap().name,
        "Vikash"
    );
}

#[tokio::test]
async fn test_rejected_permission_leaves_account_unset() {
    init_logging();
    let node = deployed_node();
    node.set_reject_permission(true);
    let mut session = session_for(&node);

    session.connect_account().await;

    assert!(session.account().is_none());
    assert!(!session.has_contract());
    assert_eq!(session.view(), PageView::Connect);
}

#[tokio::test]
async fn test_change_owner_uses_form_input() {
    init_logging();
    let node = deployed_node();
    let mut session = session_for(&node);
    session.connect_account().await;

    // Empty input: nothing is sent
    session.change_owner().await;
    assert_eq!(node.call_count("eth_sendTransaction"), 0);

    session.set_new_owner(DEV_ACCOUNTS[1].to_string());
    session.change_owner().await;
    assert_eq!(session.details().owner, DEV_ACCOUNTS[1].to_string());

    // No longer the owner: the transaction reverts and the snapshot stays
    session.set_new_owner(DEV_ACCOUNTS[2].to_string());
    session.change_owner().await;
    assert_eq!(node.call_count("eth_sendTransaction"), 2);
    assert_eq!(session.details().owner, DEV_ACCOUNTS[1].to_string());
}

#[tokio::test]
async fn test_mount_picks_up_exposed_account() {
    init_logging();
    let node = deployed_node();
    let mut session = session_for(&node);

    session.get_wallet().await;

    assert_eq!(node.call_count("eth_requestAccounts"), 0);
    match session.view() {
        PageView::Connected { account, .. } => assert_eq!(account, DEV_ACCOUNTS[0]),
        other => panic!("expected connected view, got {:?}", other),
    }
}

#[tokio::test]
async fn test_artifact_without_surface_leaves_contract_unbound() {
    init_logging();
    let node = deployed_node();
    let artifact = simple_dapp::ContractArtifact::from_json_str(
        r#"{ "contractName": "Empty", "abi": [], "bytecode": "0x" }"#,
    )
    .unwrap();
    let mut session = Session::new(
        Some(DevNodeWallet::new(node.clone())),
        DEFAULT_CONTRACT_ADDRESS,
        artifact.into(),
    );

    session.connect_account().await;
    assert!(session.account().is_some());
    assert!(!session.has_contract());

    session.get_details().await;
    assert_eq!(node.call_count("eth_call"), 0);
}
