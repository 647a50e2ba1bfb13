//! Browsing a bucket as a folder tree.

mod entry;
mod query;

pub use entry::{Folder, ListResult, Resource, ResourceEntry};
use futures::{StreamExt, TryStreamExt, stream};
use gcscat_object::client::{ListOutput, ObjectStoreClient};
use gcscat_object::types::Error as ObjectError;
use object_store::ObjectMeta;
pub use query::QueryGlob;

use crate::TRACING_TARGET_LIST;
use crate::config::{ListContext, ListParams};
use crate::connector::Connector;
use crate::error::{BoxedError, CatalogError, CatalogResult};

/// Prefix some backends report for objects whose key starts with `/`.
const ROOT_PREFIX: &str = "/";

/// Metadata lookups in flight at once while describing a listing.
const HEAD_CONCURRENCY: usize = 8;

/// Lists the objects and folders directly under `currentFolderId`.
///
/// Delimiter listings carry no content types, so each listed object is
/// looked up once more to copy its stored `mimeType`.
///
/// Fails with [`CatalogError::Unauthenticated`] before any client is built
/// when no key is stored. Every later failure becomes
/// [`CatalogError::ListingFailed`] with the cause attached.
#[tracing::instrument(
    target = TRACING_TARGET_LIST,
    skip_all,
    fields(
        bucket = %context.catalog_config.bucket_name,
        folder = ?context.params.current_folder_id,
    )
)]
pub async fn list<C: Connector>(connector: &C, context: ListContext) -> CatalogResult<ListResult> {
    let credentials = context
        .secrets
        .credentials(&context.catalog_config.bucket_name)
        .ok_or(CatalogError::Unauthenticated)?;

    let ListParams {
        current_folder_id,
        q,
    } = context.params;
    let folder = current_folder_id.unwrap_or_default();

    let listing = async {
        let query = q
            .filter(|q| !q.is_empty())
            .map(|q| QueryGlob::new(&folder, &q))
            .transpose()?;
        if let Some(query) = &query {
            tracing::debug!(target: TRACING_TARGET_LIST, glob = query.pattern(), "filtering listing");
        }

        let client = connector.connect(credentials).await?;
        let output = client.list_with_delimiter(&folder).await?;
        let (objects, folders) = partition(&folder, output, query.as_ref());
        let resources = describe(&client, objects).await?;

        let entries = resources
            .into_iter()
            .map(ResourceEntry::Resource)
            .chain(folders.into_iter().map(ResourceEntry::Folder));
        Ok::<_, BoxedError>(entries.collect())
    };

    let results = listing.await.map_err(|error| {
        tracing::error!(
            target: TRACING_TARGET_LIST,
            error = %error,
            "listing failed"
        );
        CatalogError::listing_failed(error)
    })?;

    let result = ListResult::new(results, breadcrumb(&folder));
    tracing::debug!(target: TRACING_TARGET_LIST, count = result.count, "listing complete");
    Ok(result)
}

/// Splits one listing level into its objects and folders, dropping the folder
/// itself, the synthetic root prefix and names the query rejects.
fn partition(
    folder: &str,
    output: ListOutput,
    query: Option<&QueryGlob>,
) -> (Vec<ObjectMeta>, Vec<Folder>) {
    let matches = |name: &str| query.is_none_or(|q| q.is_match(name));
    let folder_key = folder.trim_end_matches('/');

    let objects = output
        .objects
        .into_iter()
        .filter(|meta| meta.location.as_ref() != folder_key)
        .filter(|meta| matches(meta.location.as_ref()))
        .collect();

    let folders = output
        .common_prefixes
        .into_iter()
        .filter(|prefix| prefix != ROOT_PREFIX)
        .filter(|prefix| matches(prefix.as_str()))
        .map(|prefix| Folder::from_prefix(&prefix))
        .collect();

    (objects, folders)
}

/// Builds one resource per object, in listing order, with the content type
/// stored in the bucket.
async fn describe(
    client: &ObjectStoreClient,
    objects: Vec<ObjectMeta>,
) -> Result<Vec<Resource>, ObjectError> {
    stream::iter(objects)
        .map(|meta| async move {
            let key = meta.location.as_ref();
            let head = client.head(key).await?;
            Ok::<_, ObjectError>(Resource::new(key, meta.size, head.content_type))
        })
        .buffered(HEAD_CONCURRENCY)
        .try_collect()
        .await
}

/// One folder per ancestor level of `folder`, from the root down.
fn breadcrumb(folder: &str) -> Vec<Folder> {
    let mut id = String::with_capacity(folder.len());
    folder
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            id.push_str(segment);
            id.push('/');
            Folder::new(id.clone(), segment)
        })
        .collect()
}
