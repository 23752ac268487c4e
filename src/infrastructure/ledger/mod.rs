//! Ledger Implementations

mod evm;

pub use evm::{EvmLedger, DEFAULT_POLL_INTERVAL};
