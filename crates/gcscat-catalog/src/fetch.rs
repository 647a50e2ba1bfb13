//! Downloading one object into the host's temporary directory.

use std::path::{Path, PathBuf};

use futures::TryStreamExt;
use gcscat_object::client::ObjectStoreClient;
use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::TRACING_TARGET_FETCH;
use crate::config::FetchContext;
use crate::connector::Connector;
use crate::error::{BoxedError, CatalogError, CatalogResult};
use crate::naming::{basename, split_extension};
use crate::progress::ProgressLog;

/// Task name used for download progress notifications.
pub const DOWNLOAD_TASK: &str = "download";

/// A downloaded object, ready for ingestion by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedResource {
    /// Object key.
    pub id: String,
    /// File name without its extension.
    pub title: String,
    /// Location of the downloaded file.
    pub file_path: PathBuf,
    /// Extension without the dot, empty if none.
    pub format: String,
}

impl FetchedResource {
    fn new(id: String, file_path: PathBuf) -> Self {
        let (title, format) = split_extension(basename(&id));

        Self {
            title: title.to_owned(),
            format: format.to_owned(),
            id,
            file_path,
        }
    }
}

/// Streams the object `resourceId` into `tmpDir/<basename>`.
///
/// Each chunk is written before the next one is requested and a progress
/// update with the cumulative byte count follows every write. A partial file
/// is left in place on failure.
#[tracing::instrument(
    target = TRACING_TARGET_FETCH,
    skip_all,
    fields(
        bucket = %context.catalog_config.bucket_name,
        resource = %context.resource_id,
    )
)]
pub async fn fetch<C: Connector>(
    connector: &C,
    context: FetchContext,
    log: &dyn ProgressLog,
) -> CatalogResult<FetchedResource> {
    let credentials = context
        .secrets
        .credentials(&context.catalog_config.bucket_name)
        .ok_or(CatalogError::Unauthenticated)?;

    let resource_id = context.resource_id;
    let file_name = basename(&resource_id);
    let file_path = context.tmp_dir.join(file_name);

    let download = async {
        log.step(&format!("Downloading file {file_name}")).await?;

        let client = connector.connect(credentials).await?;
        let head = client.head(&resource_id).await?;
        log.task(DOWNLOAD_TASK, &format!("Downloading {file_name}"), Some(head.meta.size))
            .await?;

        if let Err(error) = write_object(&client, &resource_id, &file_path, log).await {
            if let Err(notify) = log.error(&error.to_string()).await {
                tracing::warn!(
                    target: TRACING_TARGET_FETCH,
                    error = %notify,
                    "failed to report download error"
                );
            }
            return Err(error);
        }

        Ok::<_, BoxedError>(())
    };

    download.await.map_err(|error| {
        tracing::error!(
            target: TRACING_TARGET_FETCH,
            error = %error,
            "download failed"
        );
        CatalogError::download_failed(error)
    })?;

    tracing::info!(
        target: TRACING_TARGET_FETCH,
        path = %file_path.display(),
        "download complete"
    );
    Ok(FetchedResource::new(resource_id, file_path))
}

/// Pipes the object body into a new file at `path`, returning the byte count.
async fn write_object(
    client: &ObjectStoreClient,
    key: &str,
    path: &Path,
    log: &dyn ProgressLog,
) -> Result<u64, BoxedError> {
    let mut stream = client.get(key).await?;
    let mut file = File::create(path).await?;
    let mut written = 0u64;

    let copied = async {
        while let Some(chunk) = stream.try_next().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
            log.progress(DOWNLOAD_TASK, written).await?;
        }
        Ok::<_, BoxedError>(())
    }
    .await;

    // Bytes received before a failure stay on disk.
    file.flush().await?;
    copied?;
    file.sync_all().await?;
    Ok(written)
}
