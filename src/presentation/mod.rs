//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line flags
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use deploy_recorder::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(&config, &network, |k| std::env::var(k).ok())?;
//! let outcome = use_case.execute(&options).await?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_deploy_use_case, ConcreteDeployUseCase};
