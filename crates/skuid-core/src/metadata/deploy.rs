//! Deploy payload type.

use serde::{Deserialize, Serialize};

use super::Record;

/// Records to upsert and delete in one deploy.
///
/// Unlike the on-disk manifest, records here carry their body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagePost {
    pub changes: Vec<Record>,
    pub deletions: Vec<Record>,
}

impl PagePost {
    /// A payload that upserts `changes` and deletes nothing.
    pub fn changes(changes: Vec<Record>) -> Self {
        Self {
            changes,
            deletions: Vec::new(),
        }
    }
}
