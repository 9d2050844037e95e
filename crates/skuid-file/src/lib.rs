//! skuid-file - Filesystem materialization of skuid metadata.
//!
//! Archive payloads from the service are unpacked through an
//! [`EntrySink`](skuid_core::EntrySink) by the [`Extractor`]; records are
//! persisted as manifest/body pairs by [`write_at_rest`] and reassembled by
//! [`read_files`].

mod extract;
mod glob;
mod materialize;
mod reader;
mod sink;
mod store;
mod writer;

pub use extract::{ExtractionReport, Extractor, extract_concurrent};
pub use materialize::DirectoryMaterializer;
pub use reader::read_files;
pub use sink::FsSink;
pub use store::MetadataStore;
pub use writer::write_at_rest;
