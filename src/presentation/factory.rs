//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application, and the only
//! place that reads the deployer key from the environment.

use alloy::signers::local::PrivateKeySigner;

use crate::application::DeployUseCase;
use crate::config::{AccountsConfig, Config, NetworkConfig};
use crate::domain::value_objects::Environment;
use crate::error::ConfigError;
use crate::infrastructure::{
    EvmLedger, HardhatArtifactRegistry, JsonRecordRepository, LocalFs,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase =
    DeployUseCase<HardhatArtifactRegistry, EvmLedger, JsonRecordRepository<LocalFs>>;

/// Create a deploy use case for `network` with all dependencies wired up
///
/// `get_env` supplies the private key variable named by the network's
/// `accounts` setting.
pub fn create_deploy_use_case<F>(
    config: &Config,
    network: &Environment,
    get_env: F,
) -> Result<ConcreteDeployUseCase, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let artifacts = HardhatArtifactRegistry::new(&config.paths.artifacts);
    let ledger = create_ledger(network, config.network(network)?, get_env)?;
    let records = JsonRecordRepository::new(LocalFs::new(), &config.paths.deployments);

    Ok(DeployUseCase::new(artifacts, ledger, records))
}

/// Build the chain client for one `[networks.<name>]` entry
pub fn create_ledger<F>(
    network: &Environment,
    settings: &NetworkConfig,
    get_env: F,
) -> Result<EvmLedger, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let ledger = match &settings.accounts {
        AccountsConfig::Remote => EvmLedger::remote(&settings.url),
        AccountsConfig::PrivateKey { env } => {
            let raw = get_env(env)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingPrivateKey { var: env.clone() })?;
            let signer = raw
                .trim()
                .parse::<PrivateKeySigner>()
                .map_err(|e| invalid_key(env, e))?;
            EvmLedger::with_signer(&settings.url, signer)
        }
    };

    ledger.map_err(|e| {
        tracing::debug!(error = %e, "could not build ledger");
        ConfigError::InvalidUrl {
            network: network.to_string(),
            url: settings.url.clone(),
        }
    })
}

fn invalid_key(var: &str, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidPrivateKey {
        var: var.to_string(),
        message: err.to_string(),
    }
}
