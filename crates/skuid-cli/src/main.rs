//! skuid - CLI for local skuid metadata.
//!
//! This is a thin wrapper over `skuid-file`: it materializes archive
//! payloads saved from the service and reads the resulting tree back.

mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;
use config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let settings = Settings::resolve(&cli)?;
    commands::handle(cli.command, &settings).await
}

const LEVELS: [&str; 4] = ["warn", "info", "debug", "trace"];

/// Logs go to stderr so that stdout carries only records and JSON.
/// `RUST_LOG` overrides the `-v` count.
fn init_logging(verbosity: u8, json: bool) {
    let level = LEVELS[usize::from(verbosity).min(LEVELS.len() - 1)];
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let layer = if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    };

    tracing_subscriber::registry().with(filter).with(layer).init();
}
