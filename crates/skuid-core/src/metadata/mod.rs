//! Metadata records and the payloads built from them.
//!
//! This module defines the types exchanged with the service. Reading and
//! writing them on disk lives in `skuid-file`.

mod deploy;
mod record;
mod retrieve;

pub use deploy::PagePost;
pub use record::{BODY_EXTENSION, MANIFEST_EXTENSION, Record};
pub use retrieve::{RetrieveMetadata, RetrieveRequest};
