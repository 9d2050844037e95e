//! Archive extraction into a category-scoped layout.

use std::io::{Read, Seek};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinSet;
use tracing::{debug, info, instrument, trace, warn};
use zip::ZipArchive;

use skuid_core::error::ArchiveError;
use skuid_core::{Category, EntrySink, Error, Result};

use crate::materialize::DirectoryMaterializer;

/// What an extraction wrote, for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Relative paths of written files, in write order.
    pub files: Vec<PathBuf>,
    /// Relative paths of created directories, in creation order.
    pub directories: Vec<PathBuf>,
}

impl ExtractionReport {
    /// Returns true if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }
}

/// Unpacks service archive payloads through an [`EntrySink`].
///
/// Only entries whose first path segment is a [`Category`] directory are
/// materialized; everything else in the archive is skipped silently.
#[derive(Debug, Clone)]
pub struct Extractor<S> {
    sink: S,
}

impl<S: EntrySink> Extractor<S> {
    /// Create an extractor writing through `sink`.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Extract every archive in order.
    ///
    /// Stops at the first failure. Files already written stay where they
    /// are.
    #[instrument(skip_all)]
    pub fn extract<R, I>(&self, archives: I) -> Result<ExtractionReport>
    where
        R: Read + Seek,
        I: IntoIterator<Item = R>,
    {
        let materializer = DirectoryMaterializer::new();
        let never = AtomicBool::new(false);
        let mut files = Vec::new();

        for (index, archive) in archives.into_iter().enumerate() {
            extract_archive(index, archive, &self.sink, &materializer, &never, &mut files)?;
        }

        let report = ExtractionReport {
            files,
            directories: materializer.created(),
        };

        info!(
            files = report.files.len(),
            directories = report.directories.len(),
            "Extraction complete"
        );

        Ok(report)
    }
}

/// Extract archives concurrently, one blocking worker per archive.
///
/// Workers share one [`DirectoryMaterializer`], so a category directory is
/// still created once. The first failure stops the remaining workers before
/// their next entry and is returned once all workers have stopped. Files in
/// the report are grouped by archive, in archive order.
#[instrument(skip_all, fields(archives = archives.len()))]
pub async fn extract_concurrent<S, R>(sink: S, archives: Vec<R>) -> Result<ExtractionReport>
where
    S: EntrySink + 'static,
    R: Read + Seek + Send + 'static,
{
    let sink = Arc::new(sink);
    let materializer = Arc::new(DirectoryMaterializer::new());
    let cancel = Arc::new(AtomicBool::new(false));
    let mut workers = JoinSet::new();

    for (index, archive) in archives.into_iter().enumerate() {
        let sink = Arc::clone(&sink);
        let materializer = Arc::clone(&materializer);
        let cancel = Arc::clone(&cancel);

        workers.spawn_blocking(move || {
            let mut files = Vec::new();
            let result = extract_archive(
                index,
                archive,
                &*sink,
                &materializer,
                &cancel,
                &mut files,
            );
            if result.is_err() {
                cancel.store(true, Ordering::Relaxed);
            }
            result.map(|()| (index, files))
        });
    }

    let mut finished = Vec::new();
    let mut first_error = None;

    while let Some(joined) = workers.join_next().await {
        let outcome = joined.map_err(|e| Error::Worker {
            message: e.to_string(),
        });
        match outcome.and_then(|result| result) {
            Ok(done) => finished.push(done),
            Err(err) => {
                cancel.store(true, Ordering::Relaxed);
                if first_error.is_none() {
                    first_error = Some(err);
                } else {
                    debug!(error = %err, "Dropping error from cancelled worker");
                }
            }
        }
    }

    if let Some(err) = first_error {
        return Err(err);
    }

    finished.sort_by_key(|(index, _)| *index);
    let report = ExtractionReport {
        files: finished.into_iter().flat_map(|(_, files)| files).collect(),
        directories: materializer.created(),
    };

    info!(
        files = report.files.len(),
        directories = report.directories.len(),
        "Concurrent extraction complete"
    );

    Ok(report)
}

fn extract_archive<R, S>(
    index: usize,
    reader: R,
    sink: &S,
    materializer: &DirectoryMaterializer,
    cancel: &AtomicBool,
    files: &mut Vec<PathBuf>,
) -> Result<()>
where
    R: Read + Seek,
    S: EntrySink + ?Sized,
{
    let mut archive = ZipArchive::new(reader).map_err(|e| ArchiveError::Corrupt {
        index,
        message: e.to_string(),
    })?;

    for i in 0..archive.len() {
        if cancel.load(Ordering::Relaxed) {
            debug!(archive = index, "Extraction cancelled");
            return Ok(());
        }

        let mut entry = archive.by_index(i).map_err(|e| ArchiveError::Entry {
            name: format!("#{}", i),
            message: e.to_string(),
        })?;

        if entry.is_dir() {
            continue;
        }

        let name = entry.name().to_string();
        let Some(path) = entry.enclosed_name().map(|p| p.to_path_buf()) else {
            warn!(entry = %name, "Skipping entry outside the archive root");
            continue;
        };

        let Some(category) = Category::from_entry_path(&path) else {
            trace!(entry = %name, "Skipping unrecognized entry");
            continue;
        };

        if let Some(dir) = path.parent() {
            materializer.ensure(sink, dir)?;
        }

        let mut content = Vec::new();
        entry
            .read_to_end(&mut content)
            .map_err(|e| ArchiveError::Entry {
                name: name.clone(),
                message: e.to_string(),
            })?;

        sink.write_file(&path, &mut content.as_slice())?;

        debug!(%category, path = %path.display(), "Wrote entry");
        files.push(path);
    }

    Ok(())
}
