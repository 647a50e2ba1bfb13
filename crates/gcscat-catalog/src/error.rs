//! Catalog error types.
//!
//! Precondition failures carry no payload. Operational failures keep the
//! underlying cause as their [`source`](std::error::Error::source) while the
//! displayed message stays fixed, so hosts always show the same text.

use strum::{AsRefStr, IntoStaticStr};

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Categories of catalog errors, used as a stable label in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// A credential or the bucket name is missing.
    MissingConfiguration,
    /// The credential is malformed or was rejected by the bucket.
    InvalidCredentials,
    /// No prepared credential is available.
    Unauthenticated,
    /// Enumerating the bucket failed.
    ListingFailed,
    /// Downloading an object failed.
    DownloadFailed,
}

/// Errors returned by catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A credential or the bucket name is missing.
    #[error("Service account and bucketName is required for Google Cloud Storage")]
    MissingConfiguration,

    /// The credential is malformed or was rejected by the bucket.
    #[error("Invalid bucketName or service account credentials for Google Cloud Storage")]
    InvalidCredentials(#[source] BoxedError),

    /// No prepared credential is available.
    #[error("Service Account is required to access Google Cloud Storage")]
    Unauthenticated,

    /// Enumerating the bucket failed.
    #[error("Erreur dans le listage des fichiers / Authentification GCS possiblement incorrecte")]
    ListingFailed(#[source] BoxedError),

    /// Downloading an object failed.
    #[error(
        "Erreur dans le téléchargement du fichier / Authentification GCS possiblement incorrecte"
    )]
    DownloadFailed(#[source] BoxedError),
}

impl CatalogError {
    /// Creates an invalid credentials error wrapping `source`.
    pub fn invalid_credentials(source: impl Into<BoxedError>) -> Self {
        Self::InvalidCredentials(source.into())
    }

    /// Creates a listing error wrapping `source`.
    pub fn listing_failed(source: impl Into<BoxedError>) -> Self {
        Self::ListingFailed(source.into())
    }

    /// Creates a download error wrapping `source`.
    pub fn download_failed(source: impl Into<BoxedError>) -> Self {
        Self::DownloadFailed(source.into())
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingConfiguration => ErrorKind::MissingConfiguration,
            Self::InvalidCredentials(_) => ErrorKind::InvalidCredentials,
            Self::Unauthenticated => ErrorKind::Unauthenticated,
            Self::ListingFailed(_) => ErrorKind::ListingFailed,
            Self::DownloadFailed(_) => ErrorKind::DownloadFailed,
        }
    }

    /// Returns the error kind as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind().into()
    }
}
