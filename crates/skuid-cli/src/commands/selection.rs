//! Selection command implementation.

use anyhow::Result;
use clap::Args;

use skuid_core::{Category, RetrieveMetadata, RetrieveRequest};

use crate::config::Settings;
use crate::output;

use super::load_records;

#[derive(Args, Debug)]
pub struct SelectionArgs {
    /// Only select this category
    #[arg(long)]
    pub category: Option<Category>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: SelectionArgs, settings: &Settings) -> Result<()> {
    let records = load_records(settings, args.category)?;

    let mut metadata = RetrieveMetadata::default();
    for category in Category::ALL {
        metadata.extend_from_records(
            category,
            records
                .iter()
                .filter(|(c, _)| *c == category)
                .map(|(_, r)| r),
        );
    }

    if metadata.is_empty() {
        output::note("No records to select.");
    }

    let request = RetrieveRequest::from(metadata);
    output::json(&request, args.pretty)?;

    Ok(())
}
