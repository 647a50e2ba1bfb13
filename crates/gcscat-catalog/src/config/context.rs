//! Per-call envelopes exchanged with the host.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{GcsConfig, GcsSecrets};
use crate::metadata::Capability;

/// Input and output of [`prepare`](crate::prepare::prepare).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareContext {
    /// Visible catalog configuration.
    pub catalog_config: GcsConfig,
    /// Capabilities enabled for this catalog; passed through unchanged.
    #[serde(default)]
    pub capabilities: Vec<Capability>,
    /// Secret store.
    #[serde(default)]
    pub secrets: GcsSecrets,
}

/// Browsing parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Folder prefix ending with `/`; absent or empty for the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_folder_id: Option<String>,
    /// Substring filter on the names of the folder's children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl ListParams {
    /// Lists the children of `folder`.
    pub fn folder(folder: impl Into<String>) -> Self {
        Self {
            current_folder_id: Some(folder.into()),
            q: None,
        }
    }

    /// Filters children by `q`.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }
}

/// Input of [`list_resources`](crate::GcsCatalog::list_resources).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContext {
    /// Visible catalog configuration naming the bucket.
    pub catalog_config: GcsConfig,
    /// Secret store holding the service account key for the bucket.
    #[serde(default)]
    pub secrets: GcsSecrets,
    /// Folder to browse and optional name filter.
    #[serde(default)]
    pub params: ListParams,
}

/// Input of [`get_resource`](crate::GcsCatalog::get_resource).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchContext {
    /// Visible catalog configuration naming the bucket.
    pub catalog_config: GcsConfig,
    /// Secret store holding the service account key for the bucket.
    #[serde(default)]
    pub secrets: GcsSecrets,
    /// Full object key to download.
    pub resource_id: String,
    /// Directory the object is written into.
    pub tmp_dir: PathBuf,
}
