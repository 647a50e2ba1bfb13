//! Result type for [`ObjectStoreClient::list_with_delimiter`](super::ObjectStoreClient::list_with_delimiter).

use object_store::path::DELIMITER;
use object_store::{ListResult, ObjectMeta};

/// One level of a delimiter-bounded listing.
#[derive(Debug, Default)]
pub struct ListOutput {
    /// Objects stored directly under the listed prefix.
    pub objects: Vec<ObjectMeta>,
    /// Child prefixes ("folders"), each terminated by the delimiter.
    pub common_prefixes: Vec<String>,
}

impl From<ListResult> for ListOutput {
    fn from(r: ListResult) -> Self {
        let common_prefixes = r
            .common_prefixes
            .into_iter()
            .map(|p| format!("{p}{DELIMITER}"))
            .collect();

        Self {
            objects: r.objects,
            common_prefixes,
        }
    }
}
