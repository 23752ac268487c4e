//! JSON Record Repository
//!
//! Implements the RecordRepository port as one pretty-printed JSON file per
//! network: `<root>/<network>_deployment.json`.

use std::path::{Path, PathBuf};

use alloy::primitives::{Address, TxHash};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::entities::DeploymentRecord;
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::record_repository::{RecordError, RecordRepository};
use crate::domain::value_objects::Environment;

/// File-per-network record storage
pub struct JsonRecordRepository<FS: FileSystem> {
    fs: FS,
    root: PathBuf,
}

impl<FS: FileSystem> JsonRecordRepository<FS> {
    pub fn new(fs: FS, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    /// Directory records are written to
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl<FS: FileSystem> RecordRepository for JsonRecordRepository<FS> {
    fn record_path(&self, network: &Environment) -> PathBuf {
        self.root.join(network.record_file_name())
    }

    fn save(&self, record: &DeploymentRecord) -> Result<PathBuf, RecordError> {
        self.fs
            .create_dir_all(&self.root)
            .map_err(|source| RecordError::CreateDir {
                path: self.root.clone(),
                source,
            })?;

        let path = self.record_path(record.network());
        let content = record.to_json_pretty()?;
        self.fs
            .write(&path, &content)
            .map_err(|source| RecordError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }

    fn load(&self, network: &Environment, label_key: &str) -> Result<DeploymentRecord, RecordError> {
        let path = self.record_path(network);
        let content = self.fs.read(&path).map_err(|source| RecordError::Read {
            path: path.clone(),
            source,
        })?;

        let value: Value =
            serde_json::from_str(&content).map_err(|e| RecordError::invalid(&path, e.to_string()))?;
        let fields = value
            .as_object()
            .ok_or_else(|| RecordError::invalid(&path, "expected a JSON object"))?;
        let field = |key: &str| string_field(&path, fields, key);

        let stored_network = field("network")?;
        if stored_network != network.as_str() {
            return Err(RecordError::invalid(
                &path,
                format!("record is for network '{stored_network}', expected '{network}'"),
            ));
        }

        let contract_address: Address = field("contractAddress")?
            .parse()
            .map_err(|e| RecordError::invalid(&path, format!("contractAddress: {e}")))?;
        let transaction_hash: TxHash = field("transactionHash")?
            .parse()
            .map_err(|e| RecordError::invalid(&path, format!("transactionHash: {e}")))?;
        let deployer: Address = field("deployer")?
            .parse()
            .map_err(|e| RecordError::invalid(&path, format!("deployer: {e}")))?;
        let deployment_time = DateTime::parse_from_rfc3339(field("deploymentTime")?)
            .map_err(|e| RecordError::invalid(&path, format!("deploymentTime: {e}")))?
            .with_timezone(&Utc);
        let gas_used = match fields.get("gasUsed") {
            Some(Value::String(s)) => s.parse::<u64>().ok(),
            Some(Value::Number(n)) => n.as_u64(),
            _ => None,
        }
        .ok_or_else(|| RecordError::invalid(&path, "gasUsed must be a decimal integer"))?;

        Ok(DeploymentRecord::from_parts(
            network.clone(),
            contract_address,
            transaction_hash,
            label_key.to_string(),
            field(label_key)?.to_string(),
            deployer,
            deployment_time,
            gas_used,
        ))
    }
}

fn string_field<'a>(
    path: &Path,
    fields: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a str, RecordError> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| RecordError::invalid(path, format!("missing string field '{key}'")))
}
