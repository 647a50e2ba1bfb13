//! Catalog configuration and secret store shapes.
//!
//! The host persists [`GcsConfig`] as visible configuration and
//! [`GcsSecrets`] separately. After a successful prepare the configuration
//! only ever holds [`MASKED_SECRET`] in place of the credential.

mod context;

use std::fmt;

pub use context::{FetchContext, ListContext, ListParams, PrepareContext};
use gcscat_object::providers::GcsCredentials;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placeholder shown in configuration once the credential lives in the
/// secret store.
pub const MASKED_SECRET: &str = "**********";

/// Visible catalog configuration.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct GcsConfig {
    /// Name of the bucket to browse.
    #[serde(default)]
    pub bucket_name: String,
    /// Service account key JSON, or [`MASKED_SECRET`] once stored.
    #[serde(default)]
    pub service_account: String,
}

impl GcsConfig {
    /// Creates a configuration for `bucket_name` carrying `service_account`.
    pub fn new(bucket_name: impl Into<String>, service_account: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            service_account: service_account.into(),
        }
    }

    /// Whether the service account field holds the masking placeholder.
    pub fn is_masked(&self) -> bool {
        self.service_account == MASKED_SECRET
    }
}

impl fmt::Debug for GcsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let service_account = if self.service_account.is_empty() || self.is_masked() {
            self.service_account.as_str()
        } else {
            "<redacted>"
        };

        f.debug_struct("GcsConfig")
            .field("bucket_name", &self.bucket_name)
            .field("service_account", &service_account)
            .finish()
    }
}

/// Secret store persisted by the host next to the configuration.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcsSecrets {
    /// Service account key JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account: Option<String>,
}

impl GcsSecrets {
    /// Creates a secret store holding `service_account`.
    pub fn new(service_account: impl Into<String>) -> Self {
        Self {
            service_account: Some(service_account.into()),
        }
    }

    /// Builds storage credentials for `bucket`, if a key is stored.
    pub fn credentials(&self, bucket: &str) -> Option<GcsCredentials> {
        self.service_account
            .as_deref()
            .map(|key| GcsCredentials::new(bucket, key))
    }
}

impl fmt::Debug for GcsSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GcsSecrets")
            .field(
                "service_account",
                &self.service_account.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
