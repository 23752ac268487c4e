//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::deploy::{DeployOptions, VOTING_SYSTEM_NEXT_STEPS};
use crate::domain::entities::{is_valid_label_key, DEFAULT_LABEL_KEY, FIXED_RECORD_KEYS};
use crate::domain::value_objects::{
    ConstructorArgs, Environment, FieldKind, VerificationField, VerificationPlan,
};
use crate::error::ConfigError;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Network used when neither flag, environment, nor config names one
pub const DEFAULT_NETWORK: &str = "localhost";

/// JSON-RPC endpoint of a local Hardhat/Anvil node
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Contract deployed by the built-in configuration
pub const DEFAULT_ARTIFACT: &str = "VotingSystem";

/// Constructor argument of the built-in configuration
pub const DEFAULT_ELECTION_NAME: &str = "Presidential Election 2024";

/// Contract to deploy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    pub name: String,

    #[serde(default)]
    pub constructor_args: Vec<String>,

    /// Record label; defaults to the first constructor argument
    #[serde(default)]
    pub label: Option<String>,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_ARTIFACT.to_string(),
            constructor_args: vec![DEFAULT_ELECTION_NAME.to_string()],
            label: None,
        }
    }
}

/// Input and output directories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_artifacts_dir")]
    pub artifacts: PathBuf,

    #[serde(default = "default_deployments_dir")]
    pub deployments: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            artifacts: default_artifacts_dir(),
            deployments: default_deployments_dir(),
        }
    }
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_deployments_dir() -> PathBuf {
    PathBuf::from("deployments")
}

/// Who signs the deployment
///
/// ```toml
/// accounts = "remote"
/// accounts = { private_key = { env = "DEPLOYER_PRIVATE_KEY" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountsConfig {
    /// First account the node reports; the node signs
    #[default]
    Remote,
    /// Local key read from the named environment variable
    PrivateKey { env: String },
}

/// One `[networks.<name>]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub url: String,

    #[serde(default)]
    pub accounts: AccountsConfig,
}

impl NetworkConfig {
    pub fn local() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_string(),
            accounts: AccountsConfig::Remote,
        }
    }
}

/// One `[[verification]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    pub label: String,
    pub function: String,

    #[serde(default)]
    pub kind: FieldKind,
}

impl From<&VerificationConfig> for VerificationField {
    fn from(config: &VerificationConfig) -> Self {
        VerificationField::new(&config.label, &config.function, config.kind)
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Network used when `--network` and `DEPLOYER_NETWORK` are absent
    #[serde(default)]
    pub default_network: Option<String>,

    /// JSON key the label is stored under in the record
    #[serde(default = "default_label_key")]
    pub label_key: String,

    /// Suggested follow-ups; the VotingSystem list when unset
    #[serde(default)]
    pub next_steps: Option<Vec<String>>,

    #[serde(default)]
    pub artifact: ArtifactConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    /// Merged over the built-in `localhost` and `hardhat` entries
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkConfig>,

    /// Fields read back after deployment; the VotingSystem plan when unset
    #[serde(default)]
    pub verification: Option<Vec<VerificationConfig>>,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_label_key() -> String {
    DEFAULT_LABEL_KEY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_network: None,
            label_key: default_label_key(),
            next_steps: None,
            artifact: ArtifactConfig::default(),
            paths: PathsConfig::default(),
            networks: builtin_networks(),
            verification: None,
            output: OutputConfig::default(),
        }
    }
}

/// `localhost` and `hardhat`, both pointing at a local node
pub fn builtin_networks() -> BTreeMap<String, NetworkConfig> {
    BTreeMap::from([
        ("hardhat".to_string(), NetworkConfig::local()),
        ("localhost".to_string(), NetworkConfig::local()),
    ])
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit config, `./deployer.toml`, or defaults
    pub fn load_or_default(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> Result<LoadedConfig, ConfigError> {
        loader::load_or_default(explicit, project_root)
    }

    /// Pick the target network: explicit choice, else `default_network`,
    /// else `localhost`. The name must have a `[networks]` entry.
    pub fn resolve_network(&self, requested: Option<&str>) -> Result<Environment, ConfigError> {
        let name = requested
            .or(self.default_network.as_deref())
            .unwrap_or(DEFAULT_NETWORK);

        let environment = Environment::new(name).map_err(|e| ConfigError::InvalidEnvironment {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        if !self.networks.contains_key(environment.as_str()) {
            return Err(ConfigError::UnknownNetwork {
                name: name.to_string(),
                available: self.networks.keys().cloned().collect(),
            });
        }

        Ok(environment)
    }

    /// Connection settings for an already resolved network
    pub fn network(&self, environment: &Environment) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .get(environment.as_str())
            .ok_or_else(|| ConfigError::UnknownNetwork {
                name: environment.to_string(),
                available: self.networks.keys().cloned().collect(),
            })
    }

    /// Verification plan from `[[verification]]`, or the VotingSystem plan
    pub fn verification_plan(&self) -> Result<VerificationPlan, ConfigError> {
        match &self.verification {
            None => Ok(VerificationPlan::voting_system()),
            Some(fields) => VerificationPlan::new(fields.iter().map(Into::into).collect())
                .ok_or(ConfigError::EmptyVerification),
        }
    }

    /// Suggested follow-ups shown after a successful run
    pub fn resolved_next_steps(&self) -> Vec<String> {
        match &self.next_steps {
            Some(steps) => steps.clone(),
            None if self.artifact.name == DEFAULT_ARTIFACT => {
                VOTING_SYSTEM_NEXT_STEPS.iter().map(|s| s.to_string()).collect()
            }
            None => Vec::new(),
        }
    }

    /// Everything the deploy use case needs for `network`
    pub fn deploy_options(&self, network: Environment) -> Result<DeployOptions, ConfigError> {
        if !is_valid_label_key(&self.label_key) {
            return Err(ConfigError::InvalidLabelKey {
                key: self.label_key.clone(),
                reserved: FIXED_RECORD_KEYS.iter().map(|k| k.to_string()).collect(),
            });
        }
        let mut options = DeployOptions::new(&self.artifact.name, network)
            .with_constructor_args(ConstructorArgs::new(&self.artifact.constructor_args))
            .with_label_key(&self.label_key)
            .with_verification(self.verification_plan()?)
            .with_next_steps(self.resolved_next_steps());
        if let Some(label) = &self.artifact.label {
            options = options.with_label(label);
        }
        Ok(options)
    }
}
