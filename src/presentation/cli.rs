//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - There are no subcommands: one invocation is one deployment
//! - `--network` is the only domain input; everything else comes from config

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Deploy a compiled contract, verify it, and record the deployment
#[derive(Parser, Debug)]
#[command(name = "deploy-recorder")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "The record is written to <deployments>/<network>_deployment.json.\nA later deployment to the same network replaces it."
)]
pub struct Cli {
    /// Target network (falls back to DEPLOYER_NETWORK, then the config's default_network)
    #[arg(short, long)]
    pub network: Option<String>,

    /// Path to the config file (default: ./deployer.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
