//! Retrieve command implementation.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use skuid_file::{Extractor, MetadataStore, extract_concurrent};

use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct RetrieveArgs {
    /// Archive payloads, extracted in the order given
    #[arg(required = true)]
    pub archives: Vec<PathBuf>,

    /// Extract archives concurrently
    #[arg(long)]
    pub parallel: bool,
}

pub async fn run(args: RetrieveArgs, settings: &Settings) -> Result<()> {
    let mut readers = Vec::with_capacity(args.archives.len());
    for path in &args.archives {
        let file = File::open(path)
            .with_context(|| format!("Failed to open archive {}", path.display()))?;
        readers.push(BufReader::new(file));
    }

    let sink = MetadataStore::new(&settings.dir).sink();

    let result = if args.parallel {
        extract_concurrent(sink, readers).await
    } else {
        Extractor::new(sink).extract(readers)
    };
    let report = result.context("Failed to extract metadata")?;

    for dir in &report.directories {
        info!(dir = %dir.display(), "Created directory");
    }
    for file in &report.files {
        output::wrote(&settings.dir.join(file));
    }

    output::done(&format!(
        "Retrieved {} files into {}",
        report.files.len(),
        settings.dir.display()
    ));

    Ok(())
}
