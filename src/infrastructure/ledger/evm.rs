//! EVM Ledger
//!
//! Implements the Ledger port over JSON-RPC with alloy. The deployer is
//! either the node's first unlocked account or a local private key.

use std::time::Duration;

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;

use crate::domain::entities::{ConfirmedDeployment, PendingDeployment};
use crate::domain::ports::ledger::{Ledger, LedgerError};

/// How often a pending receipt is polled
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// JSON-RPC backed ledger
pub struct EvmLedger {
    provider: DynProvider,
    /// Set when transactions are signed locally
    local_account: Option<Address>,
    poll_interval: Duration,
}

impl EvmLedger {
    /// Deploy from the node's first account (`eth_accounts`); the node signs.
    pub fn remote(url: &str) -> Result<Self, LedgerError> {
        let rpc_url = url.parse().map_err(|e| invalid_url(url, e))?;
        let provider = ProviderBuilder::new().connect_http(rpc_url).erased();
        Ok(Self {
            provider,
            local_account: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Deploy from `signer`; transactions are signed before submission.
    pub fn with_signer(url: &str, signer: PrivateKeySigner) -> Result<Self, LedgerError> {
        let rpc_url = url.parse().map_err(|e| invalid_url(url, e))?;
        let account = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(rpc_url)
            .erased();
        Ok(Self {
            provider,
            local_account: Some(account),
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

fn invalid_url(url: &str, err: impl std::fmt::Display) -> LedgerError {
    LedgerError::InvalidUrl {
        url: url.to_string(),
        message: err.to_string(),
    }
}

#[async_trait]
impl Ledger for EvmLedger {
    async fn active_account(&self) -> Result<Address, LedgerError> {
        if let Some(account) = self.local_account {
            return Ok(account);
        }

        let accounts = self
            .provider
            .get_accounts()
            .await
            .map_err(|e| LedgerError::rpc("eth_accounts", e))?;
        accounts.first().copied().ok_or(LedgerError::NoAccounts)
    }

    async fn balance(&self, account: Address) -> Result<U256, LedgerError> {
        self.provider
            .get_balance(account)
            .await
            .map_err(|e| LedgerError::rpc("eth_getBalance", e))
    }

    async fn submit_deployment(
        &self,
        from: Address,
        code: Bytes,
    ) -> Result<PendingDeployment, LedgerError> {
        let tx = TransactionRequest::default()
            .with_from(from)
            .with_deploy_code(code);

        let gas_limit = self
            .provider
            .estimate_gas(tx.clone())
            .await
            .map_err(|e| LedgerError::rpc("eth_estimateGas", e))?;
        tracing::debug!(gas_limit, "estimated deployment gas");

        let pending = self
            .provider
            .send_transaction(tx.with_gas_limit(gas_limit))
            .await
            .map_err(|e| LedgerError::rpc("eth_sendTransaction", e))?;

        Ok(PendingDeployment {
            tx_hash: *pending.tx_hash(),
            gas_limit,
        })
    }

    async fn wait_for_confirmation(
        &self,
        pending: &PendingDeployment,
    ) -> Result<ConfirmedDeployment, LedgerError> {
        let receipt = loop {
            let receipt = self
                .provider
                .get_transaction_receipt(pending.tx_hash)
                .await
                .map_err(|e| LedgerError::rpc("eth_getTransactionReceipt", e))?;
            match receipt {
                Some(receipt) => break receipt,
                None => {
                    tracing::trace!(tx_hash = %pending.tx_hash, "receipt not available yet");
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        };

        if !receipt.status() {
            return Err(LedgerError::Reverted {
                tx_hash: pending.tx_hash,
            });
        }
        let address = receipt
            .contract_address
            .ok_or(LedgerError::NoContractAddress {
                tx_hash: pending.tx_hash,
            })?;

        tracing::debug!(
            %address,
            gas_used = receipt.gas_used,
            block = ?receipt.block_number,
            "deployment confirmed"
        );

        Ok(ConfirmedDeployment {
            address,
            tx_hash: pending.tx_hash,
            gas_limit: pending.gas_limit,
            gas_used: receipt.gas_used,
            block_number: receipt.block_number,
        })
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, LedgerError> {
        let tx = TransactionRequest::default().with_to(to).with_input(data);
        self.provider
            .call(tx)
            .await
            .map_err(|e| LedgerError::rpc("eth_call", e))
    }
}
