use thiserror::Error;

/// Failures raised by a file storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Local filesystem read or write failed.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Object store request failed or answered with an error status.
    #[error("Object store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Location does not point inside the storage root.
    #[error("Refusing to access storage location '{0}'")]
    InvalidLocation(String),
}
