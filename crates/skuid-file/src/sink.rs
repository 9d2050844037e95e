//! Real-filesystem entry sink.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use skuid_core::{EntrySink, Error, Result};

/// Writes entries under a root directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// Create a sink rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl EntrySink for FsSink {
    fn ensure_dir(&self, path: &Path) -> Result<()> {
        let dir = self.root.join(path);
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))
    }

    fn write_file(&self, path: &Path, content: &mut dyn Read) -> Result<()> {
        let target = self.root.join(path);
        let mut file = File::create(&target).map_err(|e| Error::io(&target, e))?;
        io::copy(content, &mut file).map_err(|e| Error::io(&target, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_under_root() {
        let tmp = TempDir::new().unwrap();
        let sink = FsSink::new(tmp.path());

        sink.ensure_dir(Path::new("pages")).unwrap();
        sink.write_file(Path::new("pages/Home.xml"), &mut "<xml/>".as_bytes())
            .unwrap();

        let written = fs::read_to_string(tmp.path().join("pages/Home.xml")).unwrap();
        assert_eq!(written, "<xml/>");
    }

    #[test]
    fn write_without_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let sink = FsSink::new(tmp.path());

        let err = sink
            .write_file(Path::new("themes/Dark.json"), &mut "{}".as_bytes())
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
