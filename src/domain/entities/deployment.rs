//! On-chain deployment facts
//!
//! What the ledger reports back after a deployment transaction is sent and
//! after it is mined.

use alloy::primitives::{Address, TxHash};

/// A deployment transaction that was accepted by the node but not yet mined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDeployment {
    pub tx_hash: TxHash,
    /// Gas limit the transaction was sent with
    pub gas_limit: u64,
}

/// A mined, successful deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmedDeployment {
    pub address: Address,
    pub tx_hash: TxHash,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub block_number: Option<u64>,
}
