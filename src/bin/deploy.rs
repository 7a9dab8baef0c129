/// Deploy script for the SimpleContract
///
/// Sends the compiled artifact's creation bytecode, waits for the receipt
/// and prints the new address. Exits 0 on success, 1 on any error.
///
/// Environment variables (a `.env` file is honoured):
/// - `RPC_URL`: wallet/node endpoint (default `http://127.0.0.1:8545`)
/// - `ARTIFACT_PATH`: compiled artifact (default Hardhat layout)
/// - `DEPLOYER_ACCOUNT`: sender address (default: first of `eth_accounts`)

use anyhow::Context;
use simple_dapp::{
    deploy_contract, resolve_deployer, Address, ContractArtifact, DeployOptions, Deployment,
    JsonRpcProvider, DEFAULT_ARTIFACT_PATH,
};
use std::env;
use std::process::ExitCode;

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok((name, deployment)) => {
            println!("{} deployed to: {}", name, deployment.address);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<(String, Deployment)> {
    let rpc_url = env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
    let artifact_path =
        env::var("ARTIFACT_PATH").unwrap_or_else(|_| DEFAULT_ARTIFACT_PATH.to_string());
    let configured_deployer = match env::var("DEPLOYER_ACCOUNT") {
        Ok(value) => Some(
            value
                .parse::<Address>()
                .context("DEPLOYER_ACCOUNT is not a valid address")?,
        ),
        Err(_) => None,
    };

    log::info!("RPC URL: {}", rpc_url);
    log::info!("Artifact: {}", artifact_path);

    let artifact = ContractArtifact::from_path(&artifact_path)
        .with_context(|| format!("Failed to load artifact {}", artifact_path))?;
    let provider = JsonRpcProvider::new(rpc_url);

    let deployer = resolve_deployer(&provider, configured_deployer)
        .await
        .context("Failed to resolve deployer account")?;

    let deployment = deploy_contract(&provider, &artifact, deployer, &DeployOptions::default())
        .await
        .context("Deployment failed")?;

    let name = if artifact.contract_name.is_empty() {
        "Contract".to_string()
    } else {
        artifact.contract_name.clone()
    };

    Ok((name, deployment))
}
