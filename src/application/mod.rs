//! Application Layer
//!
//! Use cases that orchestrate the domain through its ports.

pub mod deploy;

pub use deploy::{DeployOptions, DeployOutcome, DeployUseCase};
