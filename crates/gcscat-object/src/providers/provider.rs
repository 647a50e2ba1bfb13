//! Client trait for creating authenticated client connections.

use serde::de::DeserializeOwned;

use crate::types::Error;

/// Factory for an authenticated connection to an object-storage service.
///
/// Implementations handle credential parsing and client construction for a
/// specific provider (e.g. GCS).
#[allow(async_fn_in_trait)]
pub trait Client: Sized + Send + 'static {
    /// Strongly-typed credentials for this provider.
    type Credentials: DeserializeOwned + Send;

    /// Unique identifier (e.g. "gcs").
    const ID: &str;

    /// Create a connected client instance.
    ///
    /// Construction is local: no request is sent until the client is used.
    async fn connect(creds: &Self::Credentials) -> Result<Self, Error>;
}
