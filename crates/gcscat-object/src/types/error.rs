//! Error type for the object layer.

use std::fmt;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// A message prefixed with the component that raised it, plus the
/// underlying cause when there is one.
pub struct Error {
    message: String,
    source: Option<BoxedError>,
}

impl Error {
    fn new(message: String) -> Self {
        Self {
            message,
            source: None,
        }
    }

    /// A storage client could not be built, formatted as `[{label}] {msg}`.
    pub fn connection(msg: impl fmt::Display, label: &str) -> Self {
        Self::new(format!("[{label}] connection failed: {msg}"))
    }

    /// Credential material is malformed.
    pub fn credentials(msg: impl fmt::Display, label: &str) -> Self {
        Self::new(format!("[{label}] invalid credentials: {msg}"))
    }

    /// `key` is not a valid object name (empty, `.` or `..` segments,
    /// control characters).
    pub fn invalid_key(key: &str, source: object_store::path::Error) -> Self {
        Self::new(format!("[object-store] invalid object key `{key}`")).with_source(source)
    }

    /// Attach a source error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl From<object_store::Error> for Error {
    fn from(err: object_store::Error) -> Self {
        Self::new(format!("[object-store] {err}")).with_source(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("message", &self.message)
            .field("source", &self.source)
            .finish()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
