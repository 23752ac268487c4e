//! Deploy Outcome
//!
//! What a successful run hands back to the caller.

use std::path::PathBuf;

use alloy::primitives::U256;

use crate::domain::entities::DeploymentRecord;
use crate::domain::value_objects::VerifiedValue;

/// Result of a successful deploy run
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    /// The record that was written
    pub record: DeploymentRecord,
    /// Where it was written
    pub record_path: PathBuf,
    /// Values read back from the contract, in plan order
    pub verification: Vec<VerifiedValue>,
    /// Deployer balance before the deployment, in wei
    pub deployer_balance: U256,
}

impl DeployOutcome {
    /// Look up a verified value by accessor name
    pub fn verified(&self, function: &str) -> Option<&str> {
        self.verification
            .iter()
            .find(|v| v.function == function)
            .map(|v| v.value.as_str())
    }
}
