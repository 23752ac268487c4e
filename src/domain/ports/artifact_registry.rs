//! Artifact Registry port
//!
//! Resolves a compiled contract by name from the build output.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::ContractFactory;

/// Why an artifact could not be resolved
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("no {name}.json under {}", root.display())]
    NotFound { name: String, root: PathBuf },

    #[error("{name} is ambiguous, found in: {}", display_paths(paths))]
    Ambiguous { name: String, paths: Vec<PathBuf> },

    #[error("{name} has no creation bytecode (interface or abstract contract?)")]
    NoBytecode { name: String },

    #[error("invalid artifact {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("failed to scan {}: {message}", root.display())]
    Scan { root: PathBuf, message: String },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Source of deployable contract factories
pub trait ArtifactRegistry {
    /// Look up the factory for the contract called `name`
    fn factory(&self, name: &str) -> Result<ContractFactory, ArtifactError>;
}
