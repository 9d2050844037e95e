//! Retrieve selection types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Category;

use super::Record;

/// A selection of records to retrieve, keyed by category.
///
/// Each mapping goes from a human-readable name to the remote identifier.
/// Empty mappings are left out of the serialized request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RetrieveMetadata {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub apps: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub data_sources: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub pages: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub profiles: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub themes: BTreeMap<String, String>,
}

impl RetrieveMetadata {
    /// Returns the mapping for a category.
    pub fn get(&self, category: Category) -> &BTreeMap<String, String> {
        match category {
            Category::Apps => &self.apps,
            Category::DataSources => &self.data_sources,
            Category::Pages => &self.pages,
            Category::Profiles => &self.profiles,
            Category::Themes => &self.themes,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut BTreeMap<String, String> {
        match category {
            Category::Apps => &mut self.apps,
            Category::DataSources => &mut self.data_sources,
            Category::Pages => &mut self.pages,
            Category::Profiles => &mut self.profiles,
            Category::Themes => &mut self.themes,
        }
    }

    /// Add one name to the selection. Returns the previous identifier.
    pub fn insert(
        &mut self,
        category: Category,
        name: impl Into<String>,
        id: impl Into<String>,
    ) -> Option<String> {
        self.get_mut(category).insert(name.into(), id.into())
    }

    /// Select every record in `records` under `category`, by name.
    pub fn extend_from_records<'a>(
        &mut self,
        category: Category,
        records: impl IntoIterator<Item = &'a Record>,
    ) {
        let mapping = self.get_mut(category);
        for record in records {
            mapping.insert(record.name.clone(), record.unique_id.clone());
        }
    }

    /// Total number of selected names across all categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Envelope sent to the service to request a retrieval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveRequest {
    pub metadata: RetrieveMetadata,
}

impl From<RetrieveMetadata> for RetrieveRequest {
    fn from(metadata: RetrieveMetadata) -> Self {
        Self { metadata }
    }
}
