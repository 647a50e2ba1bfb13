//! Client trait and object storage providers.

mod gcs;
mod provider;

pub use gcs::{GcsCredentials, GcsProvider, ServiceAccountKey};
pub use provider::Client;
