//! Entry sink trait.

use std::io::Read;
use std::path::Path;

use crate::Result;

/// Destination for materialized archive entries.
///
/// Paths are relative to whatever root the implementation writes under.
/// The extractor only talks to this trait, so it never touches a concrete
/// filesystem itself. Methods take `&self` so one sink can be shared by
/// concurrent extraction workers.
pub trait EntrySink: Send + Sync {
    /// Ensure the directory at `path` exists.
    fn ensure_dir(&self, path: &Path) -> Result<()>;

    /// Write `content` to the file at `path`, replacing any existing file.
    fn write_file(&self, path: &Path, content: &mut dyn Read) -> Result<()>;
}

impl<T: EntrySink + ?Sized> EntrySink for &T {
    fn ensure_dir(&self, path: &Path) -> Result<()> {
        (**self).ensure_dir(path)
    }

    fn write_file(&self, path: &Path, content: &mut dyn Read) -> Result<()> {
        (**self).write_file(path, content)
    }
}

impl<T: EntrySink + ?Sized> EntrySink for std::sync::Arc<T> {
    fn ensure_dir(&self, path: &Path) -> Result<()> {
        (**self).ensure_dir(path)
    }

    fn write_file(&self, path: &Path, content: &mut dyn Read) -> Result<()> {
        (**self).write_file(path, content)
    }
}
