//! Deploy Module
//!
//! The deployment-and-record pipeline.
//!
//! ## Structure
//!
//! - `options` - Run inputs (`DeployOptions`)
//! - `result` - Successful outcome (`DeployOutcome`)
//! - `use_case` - Core pipeline (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use deploy_recorder::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(artifacts, ledger, records);
//! let outcome = use_case.execute(&DeployOptions::voting_system(network)).await?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{DeployOptions, VOTING_SYSTEM_NEXT_STEPS};
pub use result::DeployOutcome;
pub use use_case::DeployUseCase;
