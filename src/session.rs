//! Page session state
//!
//! Everything the page remembers between clicks: the wallet handle, the
//! connected account, the contract handle, the last snapshot read from the
//! contract, and the owner form input. Handlers never return errors: each
//! failure is logged and the state stays as it was.

use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::{Address, U256};
use serde::Serialize;

use crate::artifact::ContractArtifact;
use crate::contract::{ContractDetails, SimpleContract};
use crate::pending::DEFAULT_POLL_INTERVAL;
use crate::provider::WalletProvider;

pub const WALLET_REQUIRED_NOTICE: &str = "A wallet provider is required to connect";

/// Last successful `getDetails()` read, as displayed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailsSnapshot {
    /// `None` until the first read succeeds
    pub data: Option<U256>,
    pub name: String,
    pub owner: String,
}

impl From<ContractDetails> for DetailsSnapshot {
    fn from(details: ContractDetails) -> Self {
        Self {
            data: Some(details.data),
            name: details.name,
            owner: details.owner.to_string(),
        }
    }
}

/// What the page shows for the current state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageView {
    /// No wallet injected
    InstallWallet,
    /// Wallet present, no account connected yet
    Connect,
    Connected {
        account: Address,
        details: DetailsSnapshot,
        new_owner: String,
    },
}

pub struct Session<P> {
    wallet: Option<P>,
    artifact: Arc<ContractArtifact>,
    contract_address: Address,
    account: Option<Address>,
    contract: Option<SimpleContract<P>>,
    details: DetailsSnapshot,
    new_owner: String,
    notice: Option<String>,
    poll_interval: Duration,
}

impl<P: WalletProvider> Session<P> {
    pub fn new(
        wallet: Option<P>,
        contract_address: Address,
        artifact: Arc<ContractArtifact>,
    ) -> Self {
        Self {
            wallet,
            artifact,
            contract_address,
            account: None,
            contract: None,
            details: DetailsSnapshot::default(),
            new_owner: String::new(),
            notice: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Receipt polling interval used by the contract handle
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn has_wallet(&self) -> bool {
        self.wallet.is_some()
    }

    pub fn account(&self) -> Option<Address> {
        self.account
    }

    pub fn has_contract(&self) -> bool {
        self.contract.is_some()
    }

    pub fn details(&self) -> &DetailsSnapshot {
        &self.details
    }

    pub fn new_owner(&self) -> &str {
        &self.new_owner
    }

    /// On mount: pick up an account the wallet already exposes, without prompting
    pub async fn get_wallet(&mut self) {
        let Some(wallet) = self.wallet.clone() else {
            log::info!("No wallet provider detected");
            return;
        };

        match wallet.accounts().await {
            Ok(accounts) => {
                if self.handle_accounts(&accounts) {
                    self.get_contract();
                }
            }
            Err(e) => log::error!("Error reading accounts: {}", e),
        }
    }

    /// "Connect" button: prompt the wallet for account access
    pub async fn connect_account(&mut self) {
        let Some(wallet) = self.wallet.clone() else {
            log::warn!("{}", WALLET_REQUIRED_NOTICE);
            self.notice = Some(WALLET_REQUIRED_NOTICE.to_string());
            return;
        };

        match wallet.request_accounts().await {
            Ok(accounts) => {
                if self.handle_accounts(&accounts) {
                    self.get_contract();
                }
            }
            Err(e) => log::error!("Error connecting account: {}", e),
        }
    }

    /// One `getDetails()` read; the snapshot only changes on success
    pub async fn get_details(&mut self) {
        let Some(contract) = self.contract.as_ref() else {
            return;
        };

        match contract.get_details().await {
            Ok(details) => {
                log::debug!("Details: data={} name={:?} owner={}", details.data, details.name, details.owner);
                self.details = details.into();
            }
            Err(e) => log::error!("Error fetching details: {}", e),
        }
    }

    pub async fn set_data(&mut self, data: U256) {
        let Some(contract) = self.contract.as_ref() else {
            return;
        };

        let confirmed = match contract.set_data(data).await {
            Ok(pending) => pending.wait().await,
            Err(e) => Err(e),
        };

        match confirmed {
            Ok(_) => self.get_details().await,
            Err(e) => log::error!("Error setting data: {}", e),
        }
    }

    pub async fn set_name(&mut self, name: &str) {
        let Some(contract) = self.contract.as_ref() else {
            return;
        };

        let confirmed = match contract.set_name(name).await {
            Ok(pending) => pending.wait().await,
            Err(e) => Err(e),
        };

        match confirmed {
            Ok(_) => self.get_details().await,
            Err(e) => log::error!("Error setting name: {}", e),
        }
    }

    /// Transfer ownership to the address typed into the owner input
    pub async fn change_owner(&mut self) {
        let Some(contract) = self.contract.as_ref() else {
            return;
        };
        let input = self.new_owner.trim();
        if input.is_empty() {
            return;
        }

        let new_owner: Address = match input.parse() {
            Ok(address) => address,
            Err(e) => {
                log::error!("Error changing owner: {:?} is not an address: {}", input, e);
                return;
            }
        };

        let confirmed = match contract.change_owner(new_owner).await {
            Ok(pending) => pending.wait().await,
            Err(e) => Err(e),
        };

        match confirmed {
            Ok(_) => self.get_details().await,
            Err(e) => log::error!("Error changing owner: {}", e),
        }
    }

    pub fn set_new_owner(&mut self, input: impl Into<String>) {
        self.new_owner = input.into();
    }

    pub fn view(&self) -> PageView {
        if self.wallet.is_none() {
            return PageView::InstallWallet;
        }

        match self.account {
            None => PageView::Connect,
            Some(account) => PageView::Connected {
                account,
                details: self.details.clone(),
                new_owner: self.new_owner.clone(),
            },
        }
    }

    /// Connected but nothing read yet; the host reads once before rendering
    pub fn needs_details(&self) -> bool {
        self.account.is_some() && self.details.data.is_none()
    }

    /// One-shot message for the user, cleared once taken
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    fn handle_accounts(&mut self, accounts: &[Address]) -> bool {
        match accounts.first() {
            Some(account) => {
                log::info!("Connected account {}", account);
                self.account = Some(*account);
                true
            }
            None => {
                log::info!("No account found");
                false
            }
        }
    }

    fn get_contract(&mut self) {
        let (Some(wallet), Some(account)) = (self.wallet.clone(), self.account) else {
            return;
        };

        match SimpleContract::new(self.contract_address, &self.artifact, wallet, account) {
            Ok(contract) => {
                self.contract = Some(contract.with_poll_interval(self.poll_interval));
            }
            Err(e) => log::error!("Error binding contract {}: {}", self.contract_address, e),
        }
    }
}
