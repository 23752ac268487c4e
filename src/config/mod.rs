//! Configuration module for deploy-recorder
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEPLOYER_*)
//! 3. Config file (`--config`, else `./deployer.toml`)
//! 4. Built-in defaults (the VotingSystem workflow)

mod loader;
mod types;

pub use loader::{
    ConfigWarning, LoadedConfig, CONFIG_FILE_NAME, ENV_DEPLOYMENTS_DIR, ENV_NETWORK,
};
pub use types::{
    AccountsConfig, ArtifactConfig, ColorMode, Config, NetworkConfig, OutputConfig, PathsConfig,
    VerificationConfig, DEFAULT_ARTIFACT, DEFAULT_ELECTION_NAME, DEFAULT_NETWORK, DEFAULT_RPC_URL,
};
