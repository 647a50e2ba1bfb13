//! Result type for [`ObjectStoreClient::head`](super::ObjectStoreClient::head).

use object_store::{Attribute, Attributes, ObjectMeta};

/// Metadata of one object, read without its body.
#[derive(Debug, Clone)]
pub struct HeadOutput {
    /// Size, location and version information.
    pub meta: ObjectMeta,
    /// Content type stored with the object, if any.
    pub content_type: Option<String>,
}

impl HeadOutput {
    pub(crate) fn new(meta: ObjectMeta, attributes: &Attributes) -> Self {
        let content_type = attributes
            .get(&Attribute::ContentType)
            .map(|value| value.to_string());
        Self { meta, content_type }
    }
}
