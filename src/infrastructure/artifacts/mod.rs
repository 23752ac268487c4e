//! Artifact Registry Implementations

mod hardhat;

pub use hardhat::HardhatArtifactRegistry;
