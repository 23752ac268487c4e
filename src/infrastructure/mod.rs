//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `artifacts/` - Compiler output lookup (Hardhat, Foundry layouts)
//! - `ledger/` - JSON-RPC chain client
//! - `fs/` - File system implementations
//! - `repositories/` - Deployment record storage
//! - `events/` - Event sinks (NDJSON)

pub mod artifacts;
pub mod events;
pub mod fs;
pub mod ledger;
pub mod repositories;

// Re-export for convenience
pub use artifacts::HardhatArtifactRegistry;
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use ledger::EvmLedger;
pub use repositories::JsonRecordRepository;
