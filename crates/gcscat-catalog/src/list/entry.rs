//! Entries returned by a listing.

use serde::{Deserialize, Serialize};

use crate::naming::{basename, split_extension};

/// A virtual folder (common prefix).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "folder")]
pub struct Folder {
    /// Full prefix, ending with `/`.
    pub id: String,
    /// Last path segment.
    pub title: String,
}

impl Folder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Builds a folder from a prefix such as `a/b/`.
    pub fn from_prefix(prefix: &str) -> Self {
        let title = prefix
            .split('/')
            .filter(|segment| !segment.is_empty())
            .next_back()
            .unwrap_or(prefix);
        Self::new(prefix, title)
    }
}

/// A downloadable object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "resource", rename_all = "camelCase")]
pub struct Resource {
    /// Full object key.
    pub id: String,
    /// Basename of the key.
    pub title: String,
    /// Size in bytes.
    pub size: u64,
    /// Extension of the basename without the dot, empty if none.
    pub format: String,
    /// Content type stored with the object, absent when none was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl Resource {
    /// Builds a resource from an object key, its size and stored content
    /// type.
    pub fn new(key: &str, size: u64, mime_type: Option<String>) -> Self {
        let title = basename(key);
        let (_, format) = split_extension(title);

        Self {
            id: key.to_owned(),
            title: title.to_owned(),
            size,
            format: format.to_owned(),
            mime_type,
        }
    }
}

/// One child of the listed folder.
///
/// Each variant carries its own `type` tag; `Resource` is tried first when
/// reading since a folder has a subset of its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceEntry {
    Resource(Resource),
    Folder(Folder),
}

impl ResourceEntry {
    /// Full key or prefix of the entry.
    pub fn id(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.id,
            Self::Resource(resource) => &resource.id,
        }
    }

    /// Display name of the entry.
    pub fn title(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.title,
            Self::Resource(resource) => &resource.title,
        }
    }
}

/// Result of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResult {
    /// Number of entries in `results`.
    pub count: usize,
    /// Objects first, then folders.
    pub results: Vec<ResourceEntry>,
    /// Breadcrumb from the root to the listed folder.
    pub path: Vec<Folder>,
}

impl ListResult {
    pub fn new(results: Vec<ResourceEntry>, path: Vec<Folder>) -> Self {
        Self {
            count: results.len(),
            results,
            path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_from_nested_key() {
        let resource = Resource::new("data/2024/sales.CSV", 42, Some("text/csv".to_owned()));
        assert_eq!(resource.title, "sales.CSV");
        assert_eq!(resource.format, "CSV");
        assert_eq!(resource.mime_type.as_deref(), Some("text/csv"));
        assert_eq!(resource.size, 42);
    }

    #[test]
    fn resource_without_extension() {
        let resource = Resource::new("README", 1, None);
        assert_eq!(resource.format, "");
        assert_eq!(resource.mime_type, None);
    }

    #[test]
    fn dotfile_has_no_format() {
        let resource = Resource::new("conf/.env", 1, None);
        assert_eq!(resource.title, ".env");
        assert_eq!(resource.format, "");
    }

    #[test]
    fn folder_title_is_last_segment() {
        assert_eq!(Folder::from_prefix("a/b/").title, "b");
        assert_eq!(Folder::from_prefix("a/").title, "a");
    }

    #[test]
    fn entries_serialize_with_type_tag() {
        let entries = vec![
            ResourceEntry::Resource(Resource::new("file1.csv", 3, Some("text/csv".to_owned()))),
            ResourceEntry::Resource(Resource::new("raw.bin", 1, None)),
            ResourceEntry::Folder(Folder::from_prefix("folder1/")),
        ];
        let json = serde_json::to_value(&entries).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {
                    "type": "resource",
                    "id": "file1.csv",
                    "title": "file1.csv",
                    "size": 3,
                    "format": "csv",
                    "mimeType": "text/csv"
                },
                {
                    "type": "resource",
                    "id": "raw.bin",
                    "title": "raw.bin",
                    "size": 1,
                    "format": "bin"
                },
                { "type": "folder", "id": "folder1/", "title": "folder1" }
            ])
        );

        let back: Vec<ResourceEntry> = serde_json::from_value(json).unwrap();
        assert_eq!(back, entries);
    }
}
