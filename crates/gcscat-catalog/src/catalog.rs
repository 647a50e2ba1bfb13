//! The catalog facade exposed to hosts.

use crate::config::{FetchContext, ListContext, PrepareContext};
use crate::connector::{Connector, GcsConnector};
use crate::error::CatalogResult;
use crate::fetch::{FetchedResource, fetch};
use crate::list::{ListResult, list};
use crate::metadata::CatalogMetadata;
use crate::prepare::prepare;
use crate::progress::ProgressLog;

/// Google Cloud Storage data catalog.
///
/// Holds no per-bucket state: every call carries its own configuration and
/// secrets and builds its own client through `C`.
#[derive(Debug, Clone, Default)]
pub struct GcsCatalog<C = GcsConnector> {
    connector: C,
}

impl GcsCatalog {
    /// Creates a catalog talking to the public GCS endpoint.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Connector> GcsCatalog<C> {
    /// Creates a catalog building its clients with `connector`.
    pub fn with_connector(connector: C) -> Self {
        Self { connector }
    }

    /// Identity and capabilities of the catalog.
    pub fn metadata(&self) -> CatalogMetadata {
        CatalogMetadata::gcs()
    }

    /// Moves the credential into the secret store and validates it.
    pub async fn prepare(&self, context: PrepareContext) -> CatalogResult<PrepareContext> {
        prepare(&self.connector, context).await
    }

    /// Lists the direct children of a folder.
    pub async fn list_resources(&self, context: ListContext) -> CatalogResult<ListResult> {
        list(&self.connector, context).await
    }

    /// Downloads one object, reporting progress to `log`.
    pub async fn get_resource(
        &self,
        context: FetchContext,
        log: &dyn ProgressLog,
    ) -> CatalogResult<FetchedResource> {
        fetch(&self.connector, context, log).await
    }
}
