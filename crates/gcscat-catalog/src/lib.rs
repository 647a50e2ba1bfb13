#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod catalog;
pub mod config;
pub mod connector;
mod error;
pub mod fetch;
pub mod list;
pub mod metadata;
mod naming;
pub mod prepare;
pub mod progress;

#[doc(hidden)]
pub mod prelude;

#[cfg(test)]
mod testing;

pub use catalog::GcsCatalog;
pub use error::{BoxedError, CatalogError, CatalogResult, ErrorKind};

/// Tracing target for credential preparation.
pub const TRACING_TARGET_PREPARE: &str = "gcscat_catalog::prepare";

/// Tracing target for bucket listings.
pub const TRACING_TARGET_LIST: &str = "gcscat_catalog::list";

/// Tracing target for downloads and their progress.
pub const TRACING_TARGET_FETCH: &str = "gcscat_catalog::fetch";
