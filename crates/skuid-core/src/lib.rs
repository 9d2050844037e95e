//! skuid-core - Core metadata types and traits.

pub mod error;
pub mod metadata;
pub mod traits;
pub mod types;

pub use error::Error;
pub use metadata::{PagePost, Record, RetrieveMetadata, RetrieveRequest};
pub use traits::EntrySink;
pub use types::Category;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
