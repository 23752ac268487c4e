//! deploy-recorder - deploy a compiled contract and record the deployment
//!
//! Deploys one EVM contract artifact to a named network, reads back a set of
//! read-only fields to confirm the deployment, and writes an immutable
//! record to `<deployments>/<network>_deployment.json`.
//!
//! ## Layers
//!
//! - `domain` - Entities, value objects and ports (no I/O)
//! - `application` - The deployment pipeline (`DeployUseCase`)
//! - `infrastructure` - Artifact lookup, JSON-RPC ledger, record storage
//! - `presentation` - CLI flags and dependency wiring
//! - `config` - `deployer.toml` loading and env overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployOutcome, DeployUseCase};
pub use config::Config;
pub use domain::entities::DeploymentRecord;
pub use domain::value_objects::Environment;
pub use error::{ConfigError, DeployError, DeployResult, DeployStep};
