//! Construction of a storage client from the secret store.

use gcscat_object::client::ObjectStoreClient;
use gcscat_object::providers::{Client, GcsCredentials, GcsProvider};
use gcscat_object::types::Error;

/// Builds one storage client per catalog call.
#[async_trait::async_trait]
pub trait Connector: Send + Sync {
    /// Connects to the bucket named in `credentials`.
    async fn connect(&self, credentials: GcsCredentials) -> Result<ObjectStoreClient, Error>;
}

/// [`Connector`] for Google Cloud Storage.
#[derive(Debug, Clone, Default)]
pub struct GcsConnector {
    endpoint: Option<String>,
}

impl GcsConnector {
    /// Creates a connector targeting the public GCS endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets `endpoint` instead (e.g. a fake GCS server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

#[async_trait::async_trait]
impl Connector for GcsConnector {
    async fn connect(&self, credentials: GcsCredentials) -> Result<ObjectStoreClient, Error> {
        let credentials = match &self.endpoint {
            Some(endpoint) => credentials.with_endpoint(endpoint),
            None => credentials,
        };

        GcsProvider::connect(&credentials)
            .await
            .map(GcsProvider::into_inner)
    }
}
