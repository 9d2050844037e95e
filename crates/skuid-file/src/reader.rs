//! Reassembling records from manifest/body pairs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use skuid_core::metadata::BODY_EXTENSION;
use skuid_core::{Error, Record, Result};

use crate::glob;

/// Read records from `dir`, keeping files named `<module_filter>_*`.
///
/// A non-empty `explicit_pattern` replaces the directory scan: it is
/// resolved as a glob and `dir`/`module_filter` are ignored. Body files are
/// never treated as manifests. Records come back in glob order, which is
/// lexical by file name.
///
/// Reading is lenient per record. A manifest that cannot be read or parsed
/// yields a default record, and a missing body file yields an empty body.
/// `null` manifest fields keep their zero value without discarding the rest
/// of the manifest.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when `dir` does not exist and no pattern is
/// given, and an invalid-input error for a malformed pattern.
#[instrument(skip_all, fields(dir = %dir.display(), module = module_filter, pattern = explicit_pattern))]
pub fn read_files(dir: &Path, module_filter: &str, explicit_pattern: &str) -> Result<Vec<Record>> {
    let candidates = if !explicit_pattern.is_empty() {
        glob::resolve(explicit_pattern)?
    } else {
        if !dir.exists() {
            return Err(Error::NotFound {
                path: dir.to_path_buf(),
            });
        }
        let pattern = Path::new(&glob::escape(&dir.to_string_lossy()))
            .join(format!("{}_*", glob::escape(module_filter)));
        glob::resolve(&pattern.to_string_lossy())?
    };

    let records: Vec<Record> = candidates
        .into_iter()
        .filter(|path| !is_body_file(path))
        .map(|manifest_path| read_pair(&manifest_path))
        .collect();

    debug!(count = records.len(), "Read records");

    Ok(records)
}

fn is_body_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == BODY_EXTENSION)
}

/// Body file paired with a manifest: same path, body extension.
fn body_path(manifest_path: &Path) -> PathBuf {
    manifest_path.with_extension(BODY_EXTENSION)
}

fn read_pair(manifest_path: &Path) -> Record {
    let mut record = match fs::read(manifest_path) {
        Ok(content) => serde_json::from_slice::<Record>(&content).unwrap_or_else(|e| {
            warn!(path = %manifest_path.display(), error = %e, "Malformed manifest, using empty record");
            Record::default()
        }),
        Err(e) => {
            warn!(path = %manifest_path.display(), error = %e, "Unreadable manifest, using empty record");
            Record::default()
        }
    };

    let body_path = body_path(manifest_path);
    record.body = match fs::read(&body_path) {
        Ok(bytes) => String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            warn!(path = %body_path.display(), error = %e, "Unreadable body, using empty body");
            String::new()
        }
    };

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn body_path_swaps_extension() {
        assert_eq!(
            body_path(Path::new("pages/app1_Home.json")),
            PathBuf::from("pages/app1_Home.xml")
        );
        assert_eq!(
            body_path(Path::new("pages/app1_v1.json.json")),
            PathBuf::from("pages/app1_v1.json.xml")
        );
    }

    #[test]
    fn body_files_are_not_manifests() {
        assert!(is_body_file(Path::new("pages/app1_Home.xml")));
        assert!(!is_body_file(Path::new("pages/app1_Home.json")));
    }

    #[test]
    fn malformed_manifest_keeps_body() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("app1_Broken.json"), "this is not even close to good JSON")
            .unwrap();
        fs::write(tmp.path().join("app1_Broken.xml"), "<xml/>").unwrap();

        let records = read_files(tmp.path(), "app1", "").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "");
        assert_eq!(records[0].body, "<xml/>");
    }

    #[test]
    fn missing_body_is_empty() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("app1_Home.json"), r#"{"name":"Home","module":"app1"}"#)
            .unwrap();

        let records = read_files(tmp.path(), "app1", "").unwrap();
        assert_eq!(records, vec![Record::new("Home", "app1")]);
    }

    #[test]
    fn null_manifest_fields_keep_the_rest() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("app1_Home.json"),
            r#"{"name":"Home","uniqueId":"p-1","module":"app1","masterPageUniqueId":null,"isMasterPage":null}"#,
        )
        .unwrap();
        fs::write(tmp.path().join("app1_Home.xml"), "<xml/>").unwrap();

        let records = read_files(tmp.path(), "app1", "").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Home");
        assert_eq!(records[0].unique_id, "p-1");
        assert_eq!(records[0].module, "app1");
        assert_eq!(records[0].master_page_unique_id, "");
        assert_eq!(records[0].body, "<xml/>");
    }

    #[test]
    fn directory_with_glob_characters_is_literal() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("pages[1]");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("app1_Home.json"), r#"{"name":"Home","module":"app1"}"#).unwrap();

        let records = read_files(&dir, "app1", "").unwrap();
        assert_eq!(records, vec![Record::new("Home", "app1")]);
    }
}
