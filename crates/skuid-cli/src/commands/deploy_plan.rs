//! Deploy plan command implementation.

use anyhow::Result;
use clap::Args;

use skuid_core::{Category, PagePost};

use crate::config::Settings;
use crate::output;

use super::load_records;

#[derive(Args, Debug)]
pub struct DeployPlanArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: DeployPlanArgs, settings: &Settings) -> Result<()> {
    let pages = load_records(settings, Some(Category::Pages))?
        .into_iter()
        .map(|(_, record)| record)
        .collect();

    let plan = PagePost::changes(pages);

    output::json(&plan, args.pretty)?;

    output::note(&format!("{} pages to deploy", plan.changes.len()));

    Ok(())
}
