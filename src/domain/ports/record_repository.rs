//! Record Repository port
//!
//! Durable storage for deployment records, one per network.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::DeploymentRecord;
use crate::domain::ports::FsError;
use crate::domain::value_objects::Environment;

/// Record storage errors
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid record in {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

impl RecordError {
    pub(crate) fn invalid(path: &Path, message: impl Into<String>) -> Self {
        RecordError::Invalid {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

/// Storage for deployment records keyed by network
pub trait RecordRepository {
    /// Where the record for `network` lives
    fn record_path(&self, network: &Environment) -> PathBuf;

    /// Persist `record`, replacing any earlier record for the same network.
    /// Creates the storage directory when missing.
    fn save(&self, record: &DeploymentRecord) -> Result<PathBuf, RecordError>;

    /// Read back the record for `network`
    fn load(&self, network: &Environment, label_key: &str) -> Result<DeploymentRecord, RecordError>;
}
