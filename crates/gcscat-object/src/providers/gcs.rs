//! Google Cloud Storage provider using [`object_store::gcp::GoogleCloudStorageBuilder`].

use std::fmt;
use std::str::FromStr;

use derive_more::Deref;
use object_store::gcp::GoogleCloudStorageBuilder;
use serde::Deserialize;

use super::Client;
use crate::client::ObjectStoreClient;
use crate::types::Error;

/// Value of the `type` field in a service account key file.
const SERVICE_ACCOUNT_TYPE: &str = "service_account";

/// Typed credentials for Google Cloud Storage.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcsCredentials {
    /// GCS bucket name.
    pub bucket: String,
    /// Content of a JSON service account key (not a path).
    pub service_account_key: String,
    /// Custom endpoint URL (for testing with a fake GCS server).
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl GcsCredentials {
    /// Creates credentials for `bucket` from raw service account key JSON.
    pub fn new(bucket: impl Into<String>, service_account_key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            service_account_key: service_account_key.into(),
            endpoint: None,
        }
    }

    /// Sets a custom endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Parses the embedded service account key.
    pub fn parse_key(&self) -> Result<ServiceAccountKey, Error> {
        self.service_account_key.parse()
    }
}

impl fmt::Debug for GcsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GcsCredentials")
            .field("bucket", &self.bucket)
            .field("service_account_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// The fields of a service account key file that identify the account.
///
/// Only used to reject malformed key material up front; the key itself is
/// handed to the storage client verbatim.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    /// Always `service_account` for keys accepted here.
    #[serde(rename = "type")]
    pub key_type: String,
    /// Project that owns the service account.
    pub project_id: String,
    /// Identifier of the private key.
    pub private_key_id: String,
    /// PEM-encoded private key.
    pub private_key: String,
    /// Service account e-mail.
    pub client_email: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub token_uri: Option<String>,
}

impl FromStr for ServiceAccountKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: Self = serde_json::from_str(s)
            .map_err(|e| Error::credentials(&e, GcsProvider::ID).with_source(e))?;

        if key.key_type != SERVICE_ACCOUNT_TYPE {
            return Err(Error::credentials(
                format!("expected key type `{SERVICE_ACCOUNT_TYPE}`, got `{}`", key.key_type),
                GcsProvider::ID,
            ));
        }

        Ok(key)
    }
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("client_email", &self.client_email)
            .finish_non_exhaustive()
    }
}

/// Google Cloud Storage-backed object storage client.
#[derive(Debug, Deref)]
pub struct GcsProvider(ObjectStoreClient);

impl GcsProvider {
    /// Unwraps the underlying client.
    pub fn into_inner(self) -> ObjectStoreClient {
        self.0
    }
}

impl Client for GcsProvider {
    type Credentials = GcsCredentials;

    const ID: &str = "gcs";

    async fn connect(creds: &Self::Credentials) -> Result<Self, Error> {
        let key = creds.parse_key()?;

        tracing::debug!(
            target: crate::TRACING_TARGET,
            bucket = %creds.bucket,
            client_email = %key.client_email,
            "building gcs client"
        );

        let mut builder = GoogleCloudStorageBuilder::new()
            .with_bucket_name(&creds.bucket)
            .with_service_account_key(&creds.service_account_key);

        if let Some(endpoint) = &creds.endpoint {
            builder = builder.with_url(endpoint);
        }

        let store = builder
            .build()
            .map_err(|e| Error::connection(&e, Self::ID).with_source(e))?;

        Ok(Self(ObjectStoreClient::new(store)))
    }
}
