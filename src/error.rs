//! Error types for deploy-recorder
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! and prints the full cause chain.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RecordError;

/// Boxed error used to attach an underlying cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for the deployment pipeline
pub type DeployResult<T> = Result<T, DeployError>;

/// Pipeline step in which a failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    ResolveArtifact,
    Submit,
    Confirm,
    Verify,
    Persist,
}

impl DeployStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStep::ResolveArtifact => "resolve_artifact",
            DeployStep::Submit => "submit",
            DeployStep::Confirm => "confirm",
            DeployStep::Verify => "verify",
            DeployStep::Persist => "persist",
        }
    }
}

impl fmt::Display for DeployStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a deployment run.
///
/// No variant is ever recovered from inside the pipeline: whichever step
/// fails first aborts the run and no record is written.
#[derive(Error, Debug)]
pub enum DeployError {
    /// The named artifact is missing from the compiled output
    #[error("artifact '{name}' not found: {reason}")]
    ArtifactNotFound { name: String, reason: String },

    /// Submission or confirmation of the deployment transaction failed
    #[error("deployment failed: {message}")]
    Deployment {
        step: DeployStep,
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// A post-deployment read failed or returned an unexpected shape
    #[error("verification of '{field}' failed")]
    Verification {
        field: String,
        #[source]
        source: BoxError,
    },

    /// Creating the deployments directory or writing the record failed
    #[error("failed to persist deployment record to {}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: RecordError,
    },
}

impl DeployError {
    pub(crate) fn submit(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        DeployError::Deployment {
            step: DeployStep::Submit,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub(crate) fn confirm(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        DeployError::Deployment {
            step: DeployStep::Confirm,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Step in which this error was raised
    pub fn step(&self) -> DeployStep {
        match self {
            DeployError::ArtifactNotFound { .. } => DeployStep::ResolveArtifact,
            DeployError::Deployment { step, .. } => *step,
            DeployError::Verification { .. } => DeployStep::Verify,
            DeployError::Persistence { .. } => DeployStep::Persist,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error while reading a config file
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML or wrong value types
    #[error("invalid config in {}: {message}", file.display())]
    Parse { file: PathBuf, message: String },

    /// Requested network has no `[networks.<name>]` entry
    #[error("unknown network '{name}' (configured: {})", available.join(", "))]
    UnknownNetwork { name: String, available: Vec<String> },

    /// Network name cannot be used as a record key
    #[error("invalid network name '{name}': {reason}")]
    InvalidEnvironment { name: String, reason: String },

    /// The private key variable named in the config is not set
    #[error("environment variable '{var}' holding the deployer key is not set")]
    MissingPrivateKey { var: String },

    /// The private key could not be parsed
    #[error("invalid deployer private key in '{var}': {message}")]
    InvalidPrivateKey { var: String, message: String },

    /// Network URL could not be parsed
    #[error("invalid RPC url '{url}' for network '{network}'")]
    InvalidUrl { network: String, url: String },

    /// `label_key` is empty or names one of the fixed record fields
    #[error("invalid label_key '{key}': must be non-empty and not one of {}", reserved.join(", "))]
    InvalidLabelKey { key: String, reserved: Vec<String> },

    /// No verification fields configured
    #[error("at least one verification field is required")]
    EmptyVerification,
}
