//! Unified object-store client backed by [`object_store::ObjectStore`].
//!
//! [`ObjectStoreClient`] is a thin, cloneable wrapper around
//! `Arc<dyn ObjectStore>` that provides the handful of operations a catalog
//! needs. Every public method is instrumented with [`tracing`].
//!
//! Keys and prefixes are taken exactly as the bucket reports them: they go
//! through [`Path::parse`], never [`Path::from`], so names containing `#`,
//! `[`, `%` and the like address the same object they were listed as.

use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use object_store::path::Path;
use object_store::{GetOptions, ObjectStore};

use crate::types::Error;

mod head_output;
mod list_output;

pub use head_output::HeadOutput;
pub use list_output::ListOutput;

/// Body of an object as a stream of chunks, pulled from the backend as it is
/// polled.
pub type ObjectStream = BoxStream<'static, Result<Bytes, Error>>;

/// Cloneable handle to any [`ObjectStore`] backend (GCS, in-memory, ...).
#[derive(Clone, Debug)]
pub struct ObjectStoreClient(pub Arc<dyn ObjectStore>);

impl ObjectStoreClient {
    /// Wrap a concrete [`ObjectStore`] implementation.
    pub fn new(store: impl ObjectStore) -> Self {
        Self(Arc::new(store))
    }

    /// Verify that the backing bucket is reachable with the configured
    /// credentials.
    ///
    /// Pulls at most one entry from an unscoped listing, which costs a single
    /// page request on remote backends. An empty bucket is reachable.
    #[tracing::instrument(name = "object.verify", skip(self))]
    pub async fn verify_reachable(&self) -> Result<(), Error> {
        let mut entries = self.0.list(None);
        match entries.next().await {
            None | Some(Ok(_)) => Ok(()),
            Some(Err(e)) => Err(e.into()),
        }
    }

    /// List one level under `prefix`, splitting objects from child prefixes.
    ///
    /// The backend drains every page before returning, so the result is
    /// complete. An empty `prefix` lists the bucket root.
    #[tracing::instrument(name = "object.list_with_delimiter", skip(self), fields(prefix))]
    pub async fn list_with_delimiter(&self, prefix: &str) -> Result<ListOutput, Error> {
        let prefix = parse_key(prefix)?;
        let prefix = (!prefix.as_ref().is_empty()).then_some(prefix);
        let result = self.0.list_with_delimiter(prefix.as_ref()).await?;
        Ok(result.into())
    }

    /// Read the metadata and content type of `key` without its body.
    #[tracing::instrument(name = "object.head", skip(self), fields(key))]
    pub async fn head(&self, key: &str) -> Result<HeadOutput, Error> {
        let path = parse_key(key)?;
        let options = GetOptions {
            head: true,
            ..Default::default()
        };
        let result = self.0.get_opts(&path, options).await?;
        Ok(HeadOutput::new(result.meta, &result.attributes))
    }

    /// Open a streamed read of the object at `key`.
    ///
    /// Only the response headers are awaited here; the body is pulled lazily
    /// through the returned stream.
    #[tracing::instrument(name = "object.get", skip(self), fields(key))]
    pub async fn get(&self, key: &str) -> Result<ObjectStream, Error> {
        let path = parse_key(key)?;
        let result = self.0.get(&path).await?;
        Ok(result.into_stream().map_err(Error::from).boxed())
    }
}

/// Converts a key as listed by the bucket into a [`Path`], unchanged.
fn parse_key(key: &str) -> Result<Path, Error> {
    Path::parse(key).map_err(|e| Error::invalid_key(key, e))
}
