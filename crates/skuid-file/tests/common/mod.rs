use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use skuid_core::{EntrySink, Error, Result};

/// A written file as seen by the recording sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrieveFile {
    pub name: String,
    pub body: String,
}

impl RetrieveFile {
    pub fn new(name: &str, body: &str) -> Self {
        Self {
            name: name.to_string(),
            body: body.to_string(),
        }
    }
}

/// Sink that records every call instead of touching the filesystem.
#[derive(Debug, Default)]
pub struct RecordingSink {
    files: Mutex<Vec<RetrieveFile>>,
    dir_calls: Mutex<Vec<String>>,
    fail_on: Option<PathBuf>,
    fail_dir_on: Option<PathBuf>,
}

impl RecordingSink {
    /// A sink whose writes to `path` fail with a permission error.
    pub fn failing_on(path: &str) -> Self {
        Self {
            fail_on: Some(PathBuf::from(path)),
            ..Self::default()
        }
    }

    /// A sink that cannot create the directory `path`.
    pub fn failing_dir_on(path: &str) -> Self {
        Self {
            fail_dir_on: Some(PathBuf::from(path)),
            ..Self::default()
        }
    }

    pub fn files(&self) -> Vec<RetrieveFile> {
        self.files.lock().unwrap().clone()
    }

    /// Every `ensure_dir` call, duplicates included.
    pub fn dir_calls(&self) -> Vec<String> {
        self.dir_calls.lock().unwrap().clone()
    }
}

impl EntrySink for RecordingSink {
    fn ensure_dir(&self, path: &Path) -> Result<()> {
        self.dir_calls
            .lock()
            .unwrap()
            .push(path.to_string_lossy().into_owned());

        if self.fail_dir_on.as_deref() == Some(path) {
            return Err(Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &mut dyn Read) -> Result<()> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }

        let mut body = String::new();
        content.read_to_string(&mut body).unwrap();
        self.files.lock().unwrap().push(RetrieveFile {
            name: path.to_string_lossy().into_owned(),
            body,
        });
        Ok(())
    }
}

/// Build an in-memory zip archive from (name, body) pairs.
pub fn zip_archive(files: &[(&str, &str)]) -> Cursor<Vec<u8>> {
    zip_archive_with(files, zip::CompressionMethod::Deflated)
}

/// Build an in-memory zip archive with an explicit compression method.
pub fn zip_archive_with(files: &[(&str, &str)], method: zip::CompressionMethod) -> Cursor<Vec<u8>> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default().compression_method(method);

    for (name, body) in files {
        writer.start_file(name.to_string(), options).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }

    let buf = writer.finish().unwrap().into_inner();
    Cursor::new(buf)
}
