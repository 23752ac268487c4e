//! Deploy Event Port
//!
//! Provides an observable interface for the deployment pipeline.
//! Enables step-by-step narration, JSON event streams, and testing
//! without capturing stdout.

use std::path::PathBuf;

use alloy::primitives::{Address, TxHash, U256};

use crate::domain::entities::DeploymentRecord;
use crate::domain::value_objects::{Environment, VerifiedValue};
use crate::error::DeployStep;

/// Event emitted during a deployment run, in pipeline order
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Artifact resolved and deployer known; about to submit
    Started {
        artifact: String,
        network: Environment,
        label: String,
        deployer: Address,
        balance: U256,
    },

    /// Deployment transaction is being sent
    Submitting { artifact: String },

    /// Transaction accepted by the node, waiting to be mined
    AwaitingConfirmation { tx_hash: TxHash },

    /// Transaction mined and contract created
    Deployed {
        address: Address,
        tx_hash: TxHash,
        gas_limit: u64,
    },

    /// Verification reads are starting
    VerificationStarted { field_count: usize },

    /// One verification read succeeded
    Verified(VerifiedValue),

    /// Record written to storage
    RecordSaved { path: PathBuf },

    /// Run finished successfully
    Completed {
        record: DeploymentRecord,
        path: PathBuf,
        next_steps: Vec<String>,
    },

    /// Run aborted; emitted once, before the error is returned
    Failed { step: DeployStep, message: String },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Step-by-step narration in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }
}
