//! Domain Entities
//!
//! - `ContractFactory` - A compiled contract (ABI + creation bytecode)
//! - `PendingDeployment` / `ConfirmedDeployment` - What the ledger reports
//! - `DeploymentRecord` - The persisted result of a run

mod contract_factory;
mod deployment;
mod deployment_record;

pub use contract_factory::{AbiError, ContractFactory};
pub use deployment::{ConfirmedDeployment, PendingDeployment};
pub use deployment_record::{
    is_valid_label_key, DeploymentRecord, DEFAULT_LABEL_KEY, FIXED_RECORD_KEYS,
};
