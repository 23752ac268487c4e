//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_registry;
pub mod clock;
pub mod deploy_events;
pub mod file_system;
pub mod ledger;
pub mod record_repository;

pub use artifact_registry::{ArtifactError, ArtifactRegistry};
pub use clock::{Clock, SystemClock};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
pub use ledger::{Ledger, LedgerError};
pub use record_repository::{RecordError, RecordRepository};
