//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use skuid_core::{Category, Record};
use skuid_file::read_files;

use crate::config::Settings;
use crate::output;

use super::load_records;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list this category (datasources, pages, apps, profiles, themes)
    #[arg(long)]
    pub category: Option<Category>,

    /// Glob of manifest files to read instead of the module filter
    #[arg(long)]
    pub file: Option<String>,

    /// Print full records as JSON lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Listed<'a> {
    category: Option<Category>,
    #[serde(flatten)]
    record: &'a Record,
}

pub fn run(args: ListArgs, settings: &Settings) -> Result<()> {
    let listed: Vec<(Option<Category>, Record)> = match &args.file {
        Some(pattern) => read_files(&settings.dir, "", pattern)
            .with_context(|| format!("Failed to read {}", pattern))?
            .into_iter()
            .map(|r| (args.category, r))
            .collect(),
        None => load_records(settings, args.category)?
            .into_iter()
            .map(|(c, r)| (Some(c), r))
            .collect(),
    };

    if listed.is_empty() {
        output::note("No records found.");
        return Ok(());
    }

    for (category, record) in &listed {
        if args.json {
            output::json(
                &Listed {
                    category: *category,
                    record,
                },
                false,
            )?;
        } else {
            let category = category.map(|c| c.dir_name()).unwrap_or("-");
            output::record_line(category, record);
        }
    }

    Ok(())
}
