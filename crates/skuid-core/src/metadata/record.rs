//! The metadata record type.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Extension of the manifest half of a record pair.
pub const MANIFEST_EXTENSION: &str = "json";

/// Extension of the body half of a record pair.
pub const BODY_EXTENSION: &str = "xml";

/// A metadata record (page, data source, app, profile or theme).
///
/// Every field defaults when absent so that partial manifests still
/// deserialize. On disk a record is split in two: the manifest holds every
/// field except `body`, and the body file holds `body` verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Record {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub unique_id: String,

    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub record_type: String,

    #[serde(deserialize_with = "null_as_default")]
    pub module: String,

    #[serde(deserialize_with = "null_as_default")]
    pub max_auto_saves: i64,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub master_page_unique_id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub is_master_page: bool,

    /// Opaque to this toolkit; serialized as `null` when absent.
    ///
    /// `Some(Value::Null)` is indistinguishable from `None` on disk and
    /// reads back as `None`.
    pub composer_settings: Option<Value>,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub body: String,
}

/// A JSON `null` leaves the field at its zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Record {
    /// Create a record with a name and module, all else defaulted.
    pub fn new(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
            ..Self::default()
        }
    }

    /// The file name shared by the manifest and body, without extension.
    ///
    /// `module_name` when the record has a module, `name` otherwise.
    pub fn basename(&self) -> String {
        if self.module.is_empty() {
            self.name.clone()
        } else {
            format!("{}_{}", self.module, self.name)
        }
    }

    /// File name of the manifest half.
    pub fn manifest_file_name(&self) -> String {
        format!("{}.{}", self.basename(), MANIFEST_EXTENSION)
    }

    /// File name of the body half.
    pub fn body_file_name(&self) -> String {
        format!("{}.{}", self.basename(), BODY_EXTENSION)
    }

    /// A copy of this record with the body stripped.
    pub fn manifest(&self) -> Self {
        Self {
            body: String::new(),
            ..self.clone()
        }
    }
}
