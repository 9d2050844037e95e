//! Subcommand implementations.

mod deploy_plan;
mod list;
mod retrieve;
mod selection;

use anyhow::{Context, Result};
use clap::Subcommand;

use skuid_core::{Category, Record};
use skuid_file::MetadataStore;

use crate::config::Settings;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Materialize retrieved archive payloads into the metadata directory
    Retrieve(retrieve::RetrieveArgs),

    /// List local records
    List(list::ListArgs),

    /// Print the deploy payload for local pages
    DeployPlan(deploy_plan::DeployPlanArgs),

    /// Print a retrieve selection covering the local records
    Selection(selection::SelectionArgs),
}

pub async fn handle(cmd: Commands, settings: &Settings) -> Result<()> {
    match cmd {
        Commands::Retrieve(args) => retrieve::run(args, settings).await,
        Commands::List(args) => list::run(args, settings),
        Commands::DeployPlan(args) => deploy_plan::run(args, settings),
        Commands::Selection(args) => selection::run(args, settings),
    }
}

/// Read the configured modules from one category, or from all of them.
///
/// A named category must exist on disk. When scanning every category,
/// absent ones are skipped. With no module configured every manifest in the
/// category is read.
pub(crate) fn load_records(
    settings: &Settings,
    category: Option<Category>,
) -> Result<Vec<(Category, Record)>> {
    let store = MetadataStore::new(&settings.dir);

    match category {
        Some(category) => {
            let records = store
                .read_modules(category, &settings.modules)
                .with_context(|| {
                    format!(
                        "Failed to read {} from {}",
                        category,
                        store.category_dir(category).display()
                    )
                })?;
            Ok(records.into_iter().map(|r| (category, r)).collect())
        }
        None => store
            .read_all(&settings.modules)
            .with_context(|| format!("Failed to read records from {}", settings.dir.display())),
    }
}
