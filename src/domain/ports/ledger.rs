//! Ledger port
//!
//! The external chain client: accounts, the deployment transaction, its
//! confirmation, and read-only calls. Every method is attempted exactly once
//! by callers; implementations must not retry on their own.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{ConfirmedDeployment, PendingDeployment};
use crate::error::BoxError;

/// Chain client failures
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("{operation} failed")]
    Rpc {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("invalid RPC url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("node reports no accounts to deploy from")]
    NoAccounts,

    #[error("transaction {tx_hash} reverted")]
    Reverted { tx_hash: TxHash },

    #[error("receipt for {tx_hash} has no contract address")]
    NoContractAddress { tx_hash: TxHash },
}

impl LedgerError {
    pub fn rpc(operation: &'static str, source: impl Into<BoxError>) -> Self {
        LedgerError::Rpc {
            operation,
            source: source.into(),
        }
    }
}

/// Chain client used by the deployment pipeline
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Account the deployment is sent from
    async fn active_account(&self) -> Result<Address, LedgerError>;

    /// Native balance of `account` in wei
    async fn balance(&self, account: Address) -> Result<U256, LedgerError>;

    /// Send a contract-creation transaction carrying `code`
    async fn submit_deployment(
        &self,
        from: Address,
        code: Bytes,
    ) -> Result<PendingDeployment, LedgerError>;

    /// Block until the transaction is mined. No timeout is applied.
    async fn wait_for_confirmation(
        &self,
        pending: &PendingDeployment,
    ) -> Result<ConfirmedDeployment, LedgerError>;

    /// Read-only call (`eth_call`) against the latest block
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, LedgerError>;
}
