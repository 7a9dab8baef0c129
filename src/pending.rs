//! Submitted transactions awaiting confirmation

use std::time::Duration;

use alloy_primitives::B256;

use crate::provider::WalletProvider;
use crate::types::TransactionReceipt;
use crate::{Result, SimpleDappError};

/// Interval between `eth_getTransactionReceipt` polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Handle to a transaction the wallet has accepted
///
/// `wait()` polls until the receipt shows up. Without a bound it waits
/// forever, like the page does when the network stalls.
#[derive(Debug)]
pub struct PendingTransaction<P> {
    provider: P,
    tx_hash: B256,
    poll_interval: Duration,
    max_attempts: Option<u32>,
}

impl<P: WalletProvider> PendingTransaction<P> {
    pub fn new(provider: P, tx_hash: B256) -> Self {
        Self {
            provider,
            tx_hash,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts.max(1));
        self
    }

    pub fn tx_hash(&self) -> B256 {
        self.tx_hash
    }

    /// Wait for the receipt; a reverted transaction is an error
    pub async fn wait(self) -> Result<TransactionReceipt> {
        let mut attempts = 0u32;
        loop {
            attempts += 1;

            if let Some(receipt) = self.provider.transaction_receipt(self.tx_hash).await? {
                if !receipt.succeeded() {
                    return Err(SimpleDappError::Reverted {
                        tx_hash: self.tx_hash.to_string(),
                    });
                }
                log::debug!(
                    "Transaction {} confirmed after {} poll(s)",
                    self.tx_hash,
                    attempts
                );
                return Ok(receipt);
            }

            if let Some(max_attempts) = self.max_attempts {
                if attempts >= max_attempts {
                    return Err(SimpleDappError::ReceiptTimeout {
                        tx_hash: self.tx_hash.to_string(),
                        attempts,
                    });
                }
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
