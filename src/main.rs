//! deploy-recorder - deploy a compiled contract and record it per network
//!
//! Usage: deploy-recorder [--network <NAME>] [--config <PATH>] [--json]
//!
//! Exits 0 once the record is written, 1 on any failure.

use clap::Parser;
use deploy_recorder::presentation::Cli;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod commands;
mod ui;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (context, result) = commands::deploy::cmd_deploy(&cli).await;
    if let Err(err) = result {
        ui::error::print_error(&err, &context);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v` when set
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
