//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Retrieve and inspect skuid metadata on the local filesystem.
#[derive(Parser, Debug)]
#[command(name = "skuid")]
#[command(author, version = env!("SKUID_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Config file (defaults to ~/.skuid.json)
    #[arg(long, global = true, env = "SKUID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Input/output directory
    #[arg(short, long, global = true, env = "SKUID_DIR")]
    pub dir: Option<PathBuf>,

    /// Module name(s), separated by a comma
    #[arg(short, long, global = true, env = "SKUID_MODULE")]
    pub module: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}
