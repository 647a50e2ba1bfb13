//! Convenience re-exports.

pub use crate::config::{
    FetchContext, GcsConfig, GcsSecrets, ListContext, ListParams, MASKED_SECRET, PrepareContext,
};
pub use crate::connector::{Connector, GcsConnector};
pub use crate::error::{CatalogError, CatalogResult, ErrorKind};
pub use crate::fetch::FetchedResource;
pub use crate::list::{Folder, ListResult, Resource, ResourceEntry};
pub use crate::metadata::{CatalogMetadata, Capability};
pub use crate::progress::{ProgressLog, TracingProgress};
pub use crate::GcsCatalog;
