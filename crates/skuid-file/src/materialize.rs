//! Deduplicated directory creation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::trace;

use skuid_core::{EntrySink, Result};

#[derive(Debug, Default)]
struct Seen {
    paths: HashSet<PathBuf>,
    order: Vec<PathBuf>,
}

/// Ensures directories through a sink at most once per path.
///
/// One materializer covers one extraction call; build a fresh one for the
/// next call. The lock is held while the sink creates the directory, so a
/// concurrent caller asking for the same path returns only once the
/// directory exists.
#[derive(Debug, Default)]
pub struct DirectoryMaterializer {
    seen: Mutex<Seen>,
}

impl DirectoryMaterializer {
    pub fn new() -> Self {
        Self::default()
    }

    fn seen(&self) -> MutexGuard<'_, Seen> {
        self.seen.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Ensure `dir` exists, calling the sink only the first time.
    ///
    /// A failed creation is not remembered, so a later request retries it.
    pub fn ensure<S: EntrySink + ?Sized>(&self, sink: &S, dir: &Path) -> Result<()> {
        let mut seen = self.seen();
        if seen.paths.contains(dir) {
            return Ok(());
        }

        sink.ensure_dir(dir)?;
        trace!(dir = %dir.display(), "Ensured directory");

        seen.paths.insert(dir.to_path_buf());
        seen.order.push(dir.to_path_buf());
        Ok(())
    }

    /// Directories created so far, in creation order.
    pub fn created(&self) -> Vec<PathBuf> {
        self.seen().order.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[derive(Default)]
    struct CountingSink {
        dirs: Mutex<Vec<PathBuf>>,
    }

    impl EntrySink for CountingSink {
        fn ensure_dir(&self, path: &Path) -> Result<()> {
            self.dirs.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        fn write_file(&self, _path: &Path, _content: &mut dyn Read) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn ensures_each_path_once() {
        let sink = CountingSink::default();
        let materializer = DirectoryMaterializer::new();

        materializer.ensure(&sink, Path::new("pages")).unwrap();
        materializer.ensure(&sink, Path::new("pages")).unwrap();
        materializer.ensure(&sink, Path::new("themes")).unwrap();

        assert_eq!(
            *sink.dirs.lock().unwrap(),
            vec![PathBuf::from("pages"), PathBuf::from("themes")]
        );
        assert_eq!(materializer.created(), *sink.dirs.lock().unwrap());
    }

    #[test]
    fn separate_materializers_do_not_share_state() {
        let sink = CountingSink::default();

        DirectoryMaterializer::new()
            .ensure(&sink, Path::new("apps"))
            .unwrap();
        DirectoryMaterializer::new()
            .ensure(&sink, Path::new("apps"))
            .unwrap();

        assert_eq!(sink.dirs.lock().unwrap().len(), 2);
    }
}
