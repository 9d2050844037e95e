//! Metadata category type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// One of the fixed top-level directories that partition metadata.
///
/// The set is closed: archive entries whose first path segment is not one
/// of these directory names are never materialized.
///
/// # Example
///
/// ```
/// use skuid_core::Category;
///
/// let category = Category::from_entry_path("pages/app1_Home.json").unwrap();
/// assert_eq!(category, Category::Pages);
/// assert_eq!(category.dir_name(), "pages");
///
/// assert!(Category::from_entry_path("readme.txt").is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    DataSources,
    Pages,
    Apps,
    Profiles,
    Themes,
}

impl Category {
    /// Every category, in directory-name order of the service layout.
    pub const ALL: [Category; 5] = [
        Category::DataSources,
        Category::Pages,
        Category::Apps,
        Category::Profiles,
        Category::Themes,
    ];

    /// Returns the on-disk directory name.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::DataSources => "datasources",
            Category::Pages => "pages",
            Category::Apps => "apps",
            Category::Profiles => "profiles",
            Category::Themes => "themes",
        }
    }

    /// Returns the key used in a retrieve selection.
    pub fn selection_key(self) -> &'static str {
        match self {
            Category::DataSources => "dataSources",
            Category::Pages => "pages",
            Category::Apps => "apps",
            Category::Profiles => "profiles",
            Category::Themes => "themes",
        }
    }

    /// Look up a category by its exact directory name.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.dir_name() == name)
    }

    /// Classify an archive entry by the first segment of its relative path.
    ///
    /// Absolute paths, `..` prefixes and single-segment paths never match,
    /// since a file sitting at the archive root has no category directory.
    pub fn from_entry_path(path: impl AsRef<Path>) -> Option<Self> {
        let mut components = path.as_ref().components();
        let first = match components.next()? {
            Component::Normal(segment) => segment.to_str()?,
            _ => return None,
        };
        // A bare "pages" entry is the directory itself, not a record file.
        components.next()?;
        Self::from_dir_name(first)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dir_name(s).ok_or_else(|| {
            InvalidInputError::Category {
                value: s.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_first_segment() {
        assert_eq!(
            Category::from_entry_path("datasources/mydatasource.json"),
            Some(Category::DataSources)
        );
        assert_eq!(
            Category::from_entry_path("themes/nested/dir/theme.json"),
            Some(Category::Themes)
        );
    }

    #[test]
    fn rejects_unknown_and_root_entries() {
        assert_eq!(Category::from_entry_path("readme.txt"), None);
        assert_eq!(Category::from_entry_path("pages"), None);
        assert_eq!(Category::from_entry_path("other/pages/x.json"), None);
        assert_eq!(Category::from_entry_path("../pages/x.json"), None);
        assert_eq!(Category::from_entry_path("Pages/x.json"), None);
    }

    #[test]
    fn parse_dir_names() {
        for category in Category::ALL {
            assert_eq!(category.dir_name().parse::<Category>().unwrap(), category);
        }
        assert!("dataSources".parse::<Category>().is_err());
    }

    #[test]
    fn selection_keys_follow_metadata_fields() {
        assert_eq!(Category::DataSources.selection_key(), "dataSources");
        assert_eq!(Category::Themes.to_string(), "themes");
    }
}
