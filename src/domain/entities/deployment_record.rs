//! Deployment Record Entity
//!
//! The one persisted artifact of a run. Built once after the deployment is
//! confirmed and verified, never mutated afterwards.

use alloy::primitives::{Address, TxHash};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::entities::ConfirmedDeployment;
use crate::domain::value_objects::Environment;

/// JSON key the label is stored under unless configured otherwise
pub const DEFAULT_LABEL_KEY: &str = "electionName";

/// Keys every record carries besides the label
pub const FIXED_RECORD_KEYS: [&str; 6] = [
    "network",
    "contractAddress",
    "transactionHash",
    "deployer",
    "deploymentTime",
    "gasUsed",
];

/// Whether `key` can hold the label without colliding with a fixed field
pub fn is_valid_label_key(key: &str) -> bool {
    !key.trim().is_empty() && !FIXED_RECORD_KEYS.contains(&key)
}

/// Immutable deployment record
///
/// Serializes to a flat JSON object whose key order is fixed:
/// `network`, `contractAddress`, `transactionHash`, `<label_key>`,
/// `deployer`, `deploymentTime`, `gasUsed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRecord {
    network: Environment,
    contract_address: Address,
    transaction_hash: TxHash,
    label_key: String,
    label: String,
    deployer: Address,
    deployment_time: DateTime<Utc>,
    gas_used: u64,
}

impl DeploymentRecord {
    pub fn new(
        network: Environment,
        deployment: &ConfirmedDeployment,
        label_key: impl Into<String>,
        label: impl Into<String>,
        deployer: Address,
        deployment_time: DateTime<Utc>,
    ) -> Self {
        Self {
            network,
            contract_address: deployment.address,
            transaction_hash: deployment.tx_hash,
            label_key: label_key.into(),
            label: label.into(),
            deployer,
            deployment_time,
            // The gas limit the transaction was sent with, not the receipt's usage.
            gas_used: deployment.gas_limit,
        }
    }

    /// Rebuild a record from its stored fields
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        network: Environment,
        contract_address: Address,
        transaction_hash: TxHash,
        label_key: String,
        label: String,
        deployer: Address,
        deployment_time: DateTime<Utc>,
        gas_used: u64,
    ) -> Self {
        Self {
            network,
            contract_address,
            transaction_hash,
            label_key,
            label,
            deployer,
            deployment_time,
            gas_used,
        }
    }

    pub fn network(&self) -> &Environment {
        &self.network
    }

    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    pub fn transaction_hash(&self) -> TxHash {
        self.transaction_hash
    }

    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn deployer(&self) -> Address {
        self.deployer
    }

    pub fn deployment_time(&self) -> DateTime<Utc> {
        self.deployment_time
    }

    pub fn gas_used(&self) -> u64 {
        self.gas_used
    }

    /// ISO-8601 timestamp with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`
    pub fn deployment_time_iso(&self) -> String {
        self.deployment_time
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Pretty-printed JSON with a trailing newline
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

impl Serialize for DeploymentRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(7))?;
        map.serialize_entry("network", self.network.as_str())?;
        map.serialize_entry("contractAddress", &self.contract_address.to_checksum(None))?;
        map.serialize_entry("transactionHash", &self.transaction_hash.to_string())?;
        map.serialize_entry(self.label_key.as_str(), &self.label)?;
        map.serialize_entry("deployer", &self.deployer.to_checksum(None))?;
        map.serialize_entry("deploymentTime", &self.deployment_time_iso())?;
        map.serialize_entry("gasUsed", &self.gas_used.to_string())?;
        map.end()
    }
}
