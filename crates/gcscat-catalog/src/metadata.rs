//! Static description of the catalog handed to the host at load time.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// Capability flags a catalog may advertise.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Capability {
    /// Resources can be downloaded for ingestion.
    Import,
    /// Listing accepts a `q` filter.
    Search,
    /// Listing is organised in folders with a breadcrumb.
    Folders,
}

/// Identity and capabilities of a catalog plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub capabilities: &'static [Capability],
}

impl CatalogMetadata {
    /// Description of the Google Cloud Storage catalog.
    pub const fn gcs() -> Self {
        Self {
            id: "gcs",
            title: "Google Cloud Storage",
            description: "Browse a Google Cloud Storage bucket and import its files.",
            capabilities: &[Capability::Import, Capability::Search, Capability::Folders],
        }
    }

    /// Whether `capability` is advertised.
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// JSON schema of [`GcsConfig`](crate::config::GcsConfig) for the host's
/// configuration form and validator.
#[cfg(feature = "schema")]
#[cfg_attr(docsrs, doc(cfg(feature = "schema")))]
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(crate::config::GcsConfig)
}
