//! Domain Layer
//!
//! The core of deploy-recorder: what a deployment is and what it needs from
//! the outside world.
//!
//! ## Structure
//!
//! - `entities/` - ContractFactory, on-chain deployment facts, DeploymentRecord
//! - `value_objects/` - Environment, ConstructorArgs, VerificationPlan
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
