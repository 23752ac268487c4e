//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json_record;

pub use json_record::JsonRecordRepository;
