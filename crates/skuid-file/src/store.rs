//! Root-scoped access to the on-disk metadata layout.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use skuid_core::metadata::MANIFEST_EXTENSION;
use skuid_core::{Category, Error, Record, Result};

use crate::glob;
use crate::reader::read_files;
use crate::sink::FsSink;
use crate::writer::write_at_rest;

/// A local metadata tree: `<root>/<category>/<module_><name>.{json,xml}`.
#[derive(Debug, Clone)]
pub struct MetadataStore {
    root: PathBuf,
}

impl MetadataStore {
    /// Create a store over the tree at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the directory for a category.
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.dir_name())
    }

    /// A sink that materializes archive entries into this tree.
    pub fn sink(&self) -> FsSink {
        FsSink::new(&self.root)
    }

    /// Persist a record under its category directory.
    pub fn write_record(&self, category: Category, record: &Record) -> Result<()> {
        write_at_rest(record, &self.category_dir(category))
    }

    /// Read the records of one module within a category.
    pub fn read_records(&self, category: Category, module: &str) -> Result<Vec<Record>> {
        read_files(&self.category_dir(category), module, "")
    }

    /// Read every manifest within a category, whatever its module.
    ///
    /// Files without the manifest extension are ignored.
    pub fn read_category(&self, category: Category) -> Result<Vec<Record>> {
        let dir = self.category_dir(category);
        if !dir.is_dir() {
            return Err(Error::NotFound { path: dir });
        }

        let pattern = Path::new(&glob::escape(&dir.to_string_lossy()))
            .join(format!("*.{}", MANIFEST_EXTENSION));
        read_files(&dir, "", &pattern.to_string_lossy())
    }

    /// Read the given modules from a category, in module order.
    ///
    /// An empty module list reads the whole category.
    pub fn read_modules(&self, category: Category, modules: &[String]) -> Result<Vec<Record>> {
        if modules.is_empty() {
            return self.read_category(category);
        }

        let mut records = Vec::new();
        for module in modules {
            records.extend(self.read_records(category, module)?);
        }
        Ok(records)
    }

    /// Read the given modules across every category present on disk.
    ///
    /// Categories without a directory are skipped rather than reported as
    /// missing.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn read_all(&self, modules: &[String]) -> Result<Vec<(Category, Record)>> {
        let mut out = Vec::new();

        for category in Category::ALL {
            if !self.category_dir(category).is_dir() {
                continue;
            }
            let records = self.read_modules(category, modules)?;
            debug!(%category, count = records.len(), "Read category");
            out.extend(records.into_iter().map(|r| (category, r)));
        }

        Ok(out)
    }
}
