//! Convenience re-exports.

pub use crate::client::{HeadOutput, ListOutput, ObjectStream, ObjectStoreClient};
pub use crate::providers::{Client, GcsCredentials, GcsProvider, ServiceAccountKey};
pub use crate::types::Error;
