//! Persisting records as manifest/body pairs.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, instrument, warn};

use skuid_core::error::InvalidInputError;
use skuid_core::{Error, Record, Result};

/// Serialize a record's manifest: every field but `body`, 4-space indented.
pub(crate) fn manifest_json(record: &Record) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    record.manifest().serialize(&mut serializer).map_err(|e| {
        Error::InvalidInput(InvalidInputError::Other {
            message: e.to_string(),
        })
    })?;
    Ok(buf)
}

/// Write `record` under `base_path` as `<basename>.json` + `<basename>.xml`.
///
/// A missing `base_path` is created on a best-effort basis: if that fails
/// the failure is only logged, and the manifest write reports the problem.
/// The body is not written when the manifest write fails.
#[instrument(skip_all, fields(record = %record.basename(), path = %base_path.display()))]
pub fn write_at_rest(record: &Record, base_path: &Path) -> Result<()> {
    if !base_path.exists()
        && let Err(e) = fs::create_dir_all(base_path)
    {
        warn!(path = %base_path.display(), error = %e, "Could not create record directory");
    }

    let manifest = manifest_json(record)?;
    let manifest_path = base_path.join(record.manifest_file_name());
    fs::write(&manifest_path, manifest).map_err(|e| Error::io(&manifest_path, e))?;

    let body_path = base_path.join(record.body_file_name());
    fs::write(&body_path, record.body.as_bytes()).map_err(|e| Error::io(&body_path, e))?;

    debug!(path = %manifest_path.display(), "Wrote record");

    Ok(())
}
