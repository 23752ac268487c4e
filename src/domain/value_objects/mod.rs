//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod constructor_args;
mod environment;
mod verification;

pub use constructor_args::ConstructorArgs;
pub use environment::{Environment, InvalidEnvironment, MAX_ENVIRONMENT_LEN, RECORD_FILE_SUFFIX};
pub use verification::{FieldKind, VerificationField, VerificationPlan, VerifiedValue};
