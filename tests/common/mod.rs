//! Common test utilities for deploy-recorder CLI and contract tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the binary
//! - Assertion macros: `assert_no_record!`, `assert_output_contains!`
//! - Fixtures: the compiled VotingSystem artifact and config snippets
//! - `ScriptedLedger`: in-memory chain for library-level runs

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;
pub mod ledger;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
